//! A sink that keeps what it receives.

use crate::error::{Diagnostic, DiagnosticSink, ParseError, Severity};

/// Gathers every diagnostic from a load, merge or render call, in the order
/// they were emitted.
///
/// ```
/// # use netdot_parser::error::{Diagnostic, DiagnosticCollector, DiagnosticSink};
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(Diagnostic::warning("connection skipped"));
///
/// assert!(collector.has_warnings());
/// assert!(collector.finish().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.worst() == Some(Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|diag| diag.severity().is_warning())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Fails with every collected diagnostic if any of them is an error.
    /// Warnings alone are dropped.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors() {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }

    fn worst(&self) -> Option<Severity> {
        self.diagnostics.iter().map(Diagnostic::severity).max()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_collector() {
        let collector = DiagnosticCollector::new();
        assert!(!collector.has_errors());
        assert!(!collector.has_warnings());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_render_warnings_do_not_fail() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("connection `c4` skipped").with_code(ErrorCode::E200));
        collector.emit(Diagnostic::warning("link `wan_9` skipped").with_code(ErrorCode::E201));

        assert!(!collector.has_errors());
        assert_eq!(collector.diagnostics().len(), 2);
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_error_keeps_everything_in_order() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("kind hint ignored").with_code(ErrorCode::E101));
        collector.emit(Diagnostic::error("unknown document shape").with_code(ErrorCode::E100));

        let err = collector.finish().unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(Diagnostic::code).collect();
        assert_eq!(codes, vec![Some(ErrorCode::E101), Some(ErrorCode::E100)]);
    }
}
