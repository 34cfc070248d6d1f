//! Error types for netdot operations.
//!
//! This module provides the main error type [`NetdotError`] which wraps
//! the conditions that can stop a document from being rendered.

use std::io;

use thiserror::Error;

use netdot_parser::error::ParseError;

/// The main error type for netdot operations.
///
/// # Diagnostic Variants
///
/// `Parse` keeps the source text next to its diagnostics so a reporter can
/// point into it. `Diagnostics` carries warnings promoted to errors, which
/// may come from several sources at once and so has no single source text.
#[derive(Debug, Error)]
pub enum NetdotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{0}")]
    Diagnostics(ParseError),

    #[error("Render error: {0}")]
    Render(String),
}

impl NetdotError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// The diagnostics behind this error, with the source text they point
    /// into when there is a single one.
    ///
    /// Returns `None` for errors that carry no diagnostics.
    pub fn diagnostics(&self) -> Option<(&ParseError, Option<&str>)> {
        match self {
            Self::Parse { err, src } => Some((err, Some(src.as_str()))),
            Self::Diagnostics(err) => Some((err, None)),
            Self::Io(_) | Self::Render(_) => None,
        }
    }
}
