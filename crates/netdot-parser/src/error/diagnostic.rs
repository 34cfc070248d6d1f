//! A single error or warning about a network document.

use thiserror::Error;

use crate::{
    error::{
        ErrorCode, Severity,
        label::{Label, LabelKind},
    },
    span::Span,
};

/// One problem found while loading, classifying, merging or rendering.
///
/// Built with the `with_*` methods:
///
/// ```
/// # use netdot_parser::error::{Diagnostic, ErrorCode};
/// # use netdot_parser::Span;
/// let diag = Diagnostic::error("invalid YAML syntax")
///     .with_code(ErrorCode::E001)
///     .with_label(Span::new(0..1), "syntax error here");
///
/// assert!(diag.severity().is_error());
/// assert_eq!(diag.to_string(), "error[E001]: invalid YAML syntax");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", headline(.severity, .code, .message))]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    /// Points at the span where the problem is.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(LabelKind::Primary, span, message)
    }

    /// Points at a span that explains the problem.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(LabelKind::Secondary, span, message)
    }

    /// A suggestion for fixing the document.
    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..self
        }
    }

    fn labelled(mut self, kind: LabelKind, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(kind, span, message));
        self
    }
}

/// `severity[code]: message`, or `severity: message` without a code.
fn headline(severity: &Severity, code: &Option<ErrorCode>, message: &str) -> String {
    match code {
        Some(code) => format!("{severity}[{code}]: {message}"),
        None => format!("{severity}: {message}"),
    }
}
