//! Structured-text loading.
//!
//! Documents are YAML; since YAML 1.2 is a superset of JSON, JSON documents
//! load through the same path.

use log::trace;
use serde_yaml::Value;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Load `source` into an untyped value.
///
/// # Errors
///
/// Returns an [`ErrorCode::E001`] diagnostic, labelled at the position the
/// YAML loader reported, when `source` is not valid YAML.
pub fn load(source: &str) -> Result<Value, Diagnostic> {
    let value = serde_yaml::from_str::<Value>(source).map_err(|err| syntax_error(source, &err))?;
    trace!(value:?; "Loaded document");
    Ok(value)
}

fn syntax_error(source: &str, err: &serde_yaml::Error) -> Diagnostic {
    let diag = Diagnostic::error(format!("invalid YAML syntax: {err}")).with_code(ErrorCode::E001);
    match err.location() {
        Some(location) => diag.with_label(Span::at(source, location.index()), "syntax error here"),
        None => diag,
    }
}
