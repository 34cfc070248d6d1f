//! Source spans attached to a diagnostic.

use crate::span::Span;

/// Whether a label marks the problem itself or only points at context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Primary,
    Secondary,
}

/// A message pinned to a byte range of the document text.
///
/// Only load errors carry labels today; once a document is lowered it no
/// longer knows where its fields came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    kind: LabelKind,
    span: Span,
    message: String,
}

impl Label {
    pub fn new(kind: LabelKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.kind == LabelKind::Primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds() {
        let here = Label::new(LabelKind::Primary, Span::new(10..20), "syntax error here");
        assert!(here.is_primary());
        assert_eq!(here.span(), Span::new(10..20));
        assert_eq!(here.message(), "syntax error here");

        let context = Label::new(LabelKind::Secondary, Span::new(0..4), "mapping starts here");
        assert!(!context.is_primary());
        assert_eq!(context.kind(), LabelKind::Secondary);
    }
}
