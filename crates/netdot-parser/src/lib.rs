//! # Netdot Parser
//!
//! Loader, classifier and merger for netdot network documents. This crate
//! turns document text into the [`NetworkData`] model consumed by the
//! renderers.
//!
//! ## Pipeline
//!
//! 1. **Load** - Read YAML (or JSON) text into an untyped value
//! 2. **Classify** - Decide which [`Shape`] the value is
//! 3. **Lower** - Read the value into the typed document for that shape
//! 4. **Merge** - Optionally fold several flat documents into one model
//! 5. **Validate** - Optionally check that site, rack and server
//!    references between hierarchical documents resolve
//!
//! ## Usage
//!
//! ```
//! use netdot_core::shape::Shape;
//! use netdot_parser::parse_document;
//!
//! let parsed = parse_document("id: sw1\nports: [{id: ge-0/0/1}]").unwrap();
//! assert_eq!(parsed.shape, Shape::Device);
//! assert_eq!(parsed.data.devices.len(), 1);
//!
//! // Unclassifiable documents are never rendered.
//! assert!(parse_document(r#"{"foo": "bar"}"#).is_none());
//! ```

pub mod error;

mod classify;
mod loader;
mod lower;
mod merge;
mod span;
mod validate;

pub use classify::classify;
pub use loader::load;
pub use lower::lower;
pub use merge::{SourceDocument, merge, merge_parsed};
pub use span::Span;
pub use validate::validate;

use log::debug;

use netdot_core::{model::NetworkData, shape::Shape};

use error::{Diagnostic, DiagnosticSink, ErrorCode, LogSink};

/// A classified document, wrapped in the slot its shape belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub shape: Shape,
    pub data: NetworkData,
}

/// Parse a single document, logging why it was rejected.
///
/// Returns `None` when the text is not valid YAML, its root is not a
/// mapping, or it matches no known shape. Use [`parse_document_with`] to
/// receive those reasons as diagnostics instead.
pub fn parse_document(source: &str) -> Option<ParsedDocument> {
    parse_document_with(source, &mut LogSink)
}

/// Parse a single document, reporting why it was rejected to `sink`.
///
/// Every `None` is accompanied by exactly one error diagnostic.
pub fn parse_document_with(
    source: &str,
    sink: &mut dyn DiagnosticSink,
) -> Option<ParsedDocument> {
    let value = match load(source) {
        Ok(value) => value,
        Err(diag) => {
            sink.emit(diag);
            return None;
        }
    };

    if !value.is_mapping() {
        sink.emit(
            Diagnostic::error("document root is not a mapping")
                .with_code(ErrorCode::E002)
                .with_help("a network document is a set of `key: value` pairs"),
        );
        return None;
    }

    let Some(shape) = classify(&value) else {
        sink.emit(
            Diagnostic::error("unknown document shape")
                .with_code(ErrorCode::E100)
                .with_help(format!(
                    "add a `type:` field naming one of: {}",
                    Shape::ALL.map(Shape::tag).join(", ")
                )),
        );
        return None;
    };

    let document = match lower(value, shape) {
        Ok(document) => document,
        Err(err) => {
            sink.emit(
                Diagnostic::error(format!("cannot read `{shape}` document: {err}"))
                    .with_code(ErrorCode::E003),
            );
            return None;
        }
    };

    debug!(shape = shape.tag(); "Classified document");
    Some(ParsedDocument {
        shape,
        data: document.into(),
    })
}
