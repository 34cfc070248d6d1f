//! A batch of diagnostics as one error value.

use thiserror::Error;

use crate::error::{Diagnostic, Severity};

/// One or more diagnostics that made a document, or a whole run, unusable.
///
/// The first diagnostic is the one shown when the error is printed; the
/// rest are reachable through [`diagnostics`](Self::diagnostics).
#[derive(Debug, Clone, Error)]
#[error("{}", summary(.diagnostics))]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The worst severity in the batch, or `None` when it is empty.
    pub fn severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(Diagnostic::severity).max()
    }
}

/// The first diagnostic, plus how many follow it.
fn summary(diagnostics: &[Diagnostic]) -> String {
    match diagnostics.split_first() {
        None => "no diagnostics".to_string(),
        Some((first, [])) => first.to_string(),
        Some((first, rest)) => format!("{first} (+{} more)", rest.len()),
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_single_diagnostic() {
        let err: ParseError = Diagnostic::error("unknown document shape")
            .with_code(ErrorCode::E100)
            .into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.to_string(), "error: unknown document shape");
        assert_eq!(err.severity(), Some(Severity::Error));
    }

    #[test]
    fn test_promoted_warnings() {
        let err: ParseError = vec![
            Diagnostic::warning("connection `c2` does not name a device on both ends"),
            Diagnostic::warning("`site-topology` document #2 cannot be merged and was dropped"),
        ]
        .into();

        assert_eq!(
            err.to_string(),
            "warning: connection `c2` does not name a device on both ends (+1 more)"
        );
        assert_eq!(err.severity(), Some(Severity::Warning));
    }

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::from(
            Diagnostic::error("invalid YAML syntax").with_code(ErrorCode::E001),
        ));

        assert_eq!(err.to_string(), "error[E001]: invalid YAML syntax");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_batch() {
        let err = ParseError::new(Vec::new());
        assert_eq!(err.to_string(), "no diagnostics");
        assert_eq!(err.severity(), None);
    }
}
