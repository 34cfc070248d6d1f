//! Multi-document merging for the flat family.

use log::debug;

use netdot_core::{model::NetworkData, shape::Shape};

use crate::{
    ParsedDocument,
    error::{Diagnostic, DiagnosticSink, ErrorCode},
    parse_document_with, validate,
};

/// One input to [`merge`]: raw document text plus an optional kind hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub content: String,
    /// What the caller believes the document is. The classified shape
    /// always wins; a disagreement is reported as a warning.
    pub kind: Option<Shape>,
}

impl SourceDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: Shape) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Parse every document and fold the flat ones into one model.
///
/// Documents that fail to parse are skipped after their diagnostics reach
/// `sink`. Hierarchy references between the parsed documents are checked
/// with [`validate`] before the fold; see [`merge_parsed`] for the fold
/// itself.
pub fn merge(docs: &[SourceDocument], sink: &mut dyn DiagnosticSink) -> NetworkData {
    let mut parsed = Vec::with_capacity(docs.len());
    for doc in docs {
        let Some(document) = parse_document_with(&doc.content, sink) else {
            continue;
        };
        if let Some(kind) = doc.kind.filter(|kind| *kind != document.shape) {
            sink.emit(
                Diagnostic::warning(format!(
                    "document declared as `{kind}` was classified as `{}`",
                    document.shape
                ))
                .with_code(ErrorCode::E101),
            );
        }
        parsed.push(document);
    }
    validate(&parsed, sink);
    merge_parsed(parsed, sink)
}

/// Fold already-parsed documents into one model.
///
/// `topology` and `links` keep the last document seen; `devices` and
/// `intents` are concatenated in input order without deduplication.
/// Hierarchical documents are dropped with an [`ErrorCode::E203`] warning.
pub fn merge_parsed(
    docs: impl IntoIterator<Item = ParsedDocument>,
    sink: &mut dyn DiagnosticSink,
) -> NetworkData {
    let mut merged = NetworkData::default();
    let mut count = 0usize;

    for doc in docs {
        count += 1;
        let shape = doc.shape;
        if merged.merge_from(doc.data) {
            sink.emit(
                Diagnostic::warning(format!(
                    "`{shape}` document #{count} cannot be merged and was dropped"
                ))
                .with_code(ErrorCode::E203)
                .with_help("render hierarchical documents on their own"),
            );
        }
    }

    debug!(
        documents = count,
        devices = merged.devices.len(),
        intents = merged.intents.len();
        "Merged documents"
    );
    merged
}
