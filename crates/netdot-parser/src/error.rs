//! Diagnostics for network documents.
//!
//! A [`Diagnostic`] is one error or warning with an optional [`ErrorCode`],
//! help text and [`Label`]s into the source. Loading, classification,
//! merging and rendering report through a [`DiagnosticSink`] instead of a
//! global logger; [`DiagnosticCollector`] keeps them and [`LogSink`] logs
//! them. A batch that must be returned as one error value is a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use netdot_parser::error::{Diagnostic, DiagnosticCollector, DiagnosticSink, ErrorCode};
//! # use netdot_parser::Span;
//!
//! let mut collector = DiagnosticCollector::new();
//! collector.emit(
//!     Diagnostic::error("invalid YAML syntax")
//!         .with_code(ErrorCode::E001)
//!         .with_label(Span::new(12..13), "unexpected character")
//!         .with_help("check indentation near this line"),
//! );
//!
//! assert!(collector.finish().is_err());
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;
mod sink;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelKind};
pub use parse_error::ParseError;
pub use severity::Severity;
pub use sink::{DiagnosticSink, LogSink};
