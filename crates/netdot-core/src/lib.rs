//! Netdot Core Types and Definitions
//!
//! This crate provides the foundational types shared by the netdot parser,
//! renderer and CLI. It includes:
//!
//! - **Shapes**: The eight document kinds and their families ([`shape::Shape`])
//! - **Views**: Rendering strategies for flat documents ([`view::ViewMode`])
//! - **Model**: Typed documents and the merged render input ([`model`] module)
//! - **Identifiers**: DOT identifier and label escaping ([`identifier`] module)
//! - **Lenient**: Forgiving deserializers for hand-written input ([`lenient`] module)

pub mod identifier;
pub mod lenient;
pub mod model;
pub mod shape;
pub mod view;
