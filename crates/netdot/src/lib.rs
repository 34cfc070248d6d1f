//! Netdot - Transpile structured network models into Graphviz DOT.
//!
//! Network documents (topology, devices, links, intents, and the site, rack
//! and server hierarchy) are loaded, classified, optionally merged and then
//! rendered as a DOT document for an external layout engine.

pub mod config;

mod error;
mod export;

pub use netdot_core::{identifier, model, shape, view};
pub use netdot_parser::{ParsedDocument, SourceDocument};

pub use error::NetdotError;
pub use export::dot::{Conversion, render};

use log::{debug, info, trace};

use netdot_parser::error::{DiagnosticCollector, DiagnosticSink, LogSink, ParseError};

use config::AppConfig;
use model::NetworkData;

/// Builder for parsing, merging and rendering network documents.
///
/// # Examples
///
/// ```rust
/// use netdot::{NetworkBuilder, config::AppConfig};
///
/// let source = "type: links\nconnections:\n  - from: {device: A, port: p1}\n    to: {device: B, port: p2}\n";
///
/// let builder = NetworkBuilder::new(AppConfig::default());
///
/// // Parse source to the network model
/// let parsed = builder.parse(source).expect("Failed to parse");
///
/// // Render the model to DOT
/// let dot = builder.render_dot(&parsed.data).expect("Failed to render");
/// assert!(dot.contains("A -> B"));
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    config: AppConfig,
}

impl NetworkBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netdot::{NetworkBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = NetworkBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse one document into the network model.
    ///
    /// # Errors
    ///
    /// Returns [`NetdotError::Parse`] when the text is not valid YAML, its
    /// root is not a mapping, or it matches no known document shape.
    pub fn parse(&self, source: &str) -> Result<ParsedDocument, NetdotError> {
        info!("Parsing document");

        let mut collector = DiagnosticCollector::new();
        let Some(parsed) = netdot_parser::parse_document_with(source, &mut collector) else {
            let err = ParseError::new(collector.into_diagnostics());
            return Err(NetdotError::new_parse_error(err, source));
        };

        debug!(shape = parsed.shape.tag(); "Document parsed successfully");
        trace!(data:? = parsed.data; "Parsed document");

        Ok(parsed)
    }

    /// Parse several documents and merge the flat ones into one model.
    ///
    /// Every document must parse; the first failure is returned with its
    /// source so it can be reported against that text. This is stricter
    /// than [`netdot_parser::merge`], which skips documents that do not
    /// parse and carries on with the rest.
    ///
    /// Hierarchy references between the documents are checked with
    /// [`netdot_parser::validate`], and hierarchical documents are then
    /// dropped from the merge. Both are reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`NetdotError::Parse`] for the first document that does not
    /// parse, or [`NetdotError::Diagnostics`] when warnings are denied and
    /// the check or the merge produced any.
    pub fn merge(&self, sources: &[&str]) -> Result<NetworkData, NetdotError> {
        info!(documents = sources.len(); "Merging documents");

        let parsed = sources
            .iter()
            .map(|source| self.parse(source))
            .collect::<Result<Vec<_>, _>>()?;

        let mut collector = DiagnosticCollector::new();
        netdot_parser::validate(&parsed, &mut collector);
        let merged = netdot_parser::merge_parsed(parsed, &mut collector);
        self.settle(collector)?;

        Ok(merged)
    }

    /// Render a network model to a DOT document.
    ///
    /// Flat models are drawn with the configured view mode; hierarchical
    /// models ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`NetdotError::Render`] if the renderer failed, or
    /// [`NetdotError::Diagnostics`] when warnings are denied and rendering
    /// produced any.
    pub fn render_dot(&self, data: &NetworkData) -> Result<String, NetdotError> {
        let view = self.config.render().view();
        info!(view = view.tag(); "Rendering network");

        let mut collector = DiagnosticCollector::new();
        let conversion = render(data, view, &mut collector);
        let dot = conversion.into_result().map_err(NetdotError::Render)?;
        self.settle(collector)?;

        info!("DOT rendered successfully");
        Ok(dot)
    }

    /// Log collected diagnostics and apply the warning policy.
    fn settle(&self, collector: DiagnosticCollector) -> Result<(), NetdotError> {
        let diagnostics = collector.into_diagnostics();
        for diagnostic in &diagnostics {
            LogSink.emit(diagnostic.clone());
        }

        if self.config.diagnostics().deny_warnings() && !diagnostics.is_empty() {
            return Err(NetdotError::Diagnostics(ParseError::new(diagnostics)));
        }
        Ok(())
    }
}
