//! How bad a diagnostic is.

use std::fmt;

use log::Level;

/// Severity of a [`Diagnostic`](crate::error::Diagnostic).
///
/// Ordered so that `Warning < Error`; the worst severity of a batch is its
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Part of a document was skipped; the rest still renders.
    Warning,
    /// The document was rejected and nothing is rendered from it.
    Error,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        *self == Severity::Warning
    }

    /// The `log` level a diagnostic of this severity is reported at.
    pub fn log_level(self) -> Level {
        match self {
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_severity_is_max() {
        let worst = [Severity::Warning, Severity::Error, Severity::Warning]
            .into_iter()
            .max();
        assert_eq!(worst, Some(Severity::Error));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Severity::Warning.log_level(), Level::Warn);
        assert_eq!(Severity::Error.log_level(), Level::Error);
    }
}
