//! DOT rendering for network models.
//!
//! [`render`] is the single error boundary of the renderers: it picks one
//! renderer for the model, wraps its output in the root graph and turns any
//! writer failure into a [`Conversion`] with an error message.
//!
//! Hierarchical slots take precedence over the flat view, in the order
//! site topology, site equipment, rack servers, server details. Only one
//! renderer runs per call.

mod connection;
mod device;
mod rack_servers;
mod server_details;
mod site_equipment;
mod site_topology;
mod topology;
mod writer;

pub use writer::{Attr, DotWriter, NodeStyle, label_lines};

use std::fmt;

use log::{debug, info};

use netdot_core::{
    model::{NetworkData, RackServers, ServerDetails, SiteEquipment, SiteTopology},
    view::ViewMode,
};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

/// Signature shared by the flat-family renderers.
type FlatRenderer = fn(&NetworkData, &mut DotWriter, &mut dyn DiagnosticSink) -> fmt::Result;

/// The result of one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    dot_code: String,
    error: Option<String>,
}

impl Conversion {
    /// The generated DOT document; empty when rendering failed.
    pub fn dot_code(&self) -> &str {
        &self.dot_code
    }

    /// Why rendering failed, if it did.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.dot_code),
        }
    }
}

/// Which renderer a model resolves to.
#[derive(Debug, Clone, Copy)]
enum RenderTarget<'a> {
    SiteTopology(&'a SiteTopology),
    SiteEquipment(&'a SiteEquipment),
    RackServers(&'a RackServers),
    ServerDetails(&'a ServerDetails),
    Flat(ViewMode),
}

impl<'a> RenderTarget<'a> {
    fn resolve(data: &'a NetworkData, view: ViewMode) -> Self {
        if let Some(doc) = &data.site_topology {
            RenderTarget::SiteTopology(doc)
        } else if let Some(doc) = &data.site_equipment {
            RenderTarget::SiteEquipment(doc)
        } else if let Some(doc) = &data.rack_servers {
            RenderTarget::RackServers(doc)
        } else if let Some(doc) = &data.server_details {
            RenderTarget::ServerDetails(doc)
        } else {
            RenderTarget::Flat(view)
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RenderTarget::SiteTopology(_) => "site-topology",
            RenderTarget::SiteEquipment(_) => "site-equipment",
            RenderTarget::RackServers(_) => "rack-servers",
            RenderTarget::ServerDetails(_) => "server-details",
            RenderTarget::Flat(view) => view.tag(),
        }
    }
}

fn flat_renderer(view: ViewMode) -> FlatRenderer {
    match view {
        ViewMode::Topology => topology::render,
        ViewMode::Device => device::render,
        ViewMode::Connection => connection::render,
        ViewMode::Full => render_full,
        ViewMode::Intent => render_intent,
    }
}

/// Render `data` as a DOT document.
///
/// Soft anomalies in the data (unresolved endpoints, incomplete links) are
/// reported to `sink` as warnings and the offending statement is skipped.
/// A writer failure yields an empty document, an error message and an
/// [`ErrorCode::E300`] diagnostic.
pub fn render(data: &NetworkData, view: ViewMode, sink: &mut dyn DiagnosticSink) -> Conversion {
    let target = RenderTarget::resolve(data, view);
    info!(target = target.name(); "Rendering DOT");

    match write_document(data, target, sink) {
        Ok(dot_code) => {
            debug!(bytes = dot_code.len(); "DOT rendered");
            Conversion {
                dot_code,
                error: None,
            }
        }
        Err(err) => {
            let message = format!("failed to render `{}` view: {err}", target.name());
            sink.emit(Diagnostic::error(message.clone()).with_code(ErrorCode::E300));
            Conversion {
                dot_code: String::new(),
                error: Some(message),
            }
        }
    }
}

fn write_document(
    data: &NetworkData,
    target: RenderTarget<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, fmt::Error> {
    let mut w = DotWriter::new();
    write_preamble(&mut w)?;

    match target {
        RenderTarget::SiteTopology(doc) => site_topology::render(doc, &mut w, sink)?,
        RenderTarget::SiteEquipment(doc) => site_equipment::render(doc, &mut w, sink)?,
        RenderTarget::RackServers(doc) => rack_servers::render(doc, &mut w, sink)?,
        RenderTarget::ServerDetails(doc) => server_details::render(doc, &mut w, sink)?,
        RenderTarget::Flat(view) => flat_renderer(view)(data, &mut w, sink)?,
    }

    w.end_block()?;
    Ok(w.finish())
}

fn write_preamble(w: &mut DotWriter) -> fmt::Result {
    w.begin_graph()?;
    w.attribute(Attr::raw("rankdir", "TB"))?;
    w.statement("node [shape=box3d, style=\"rounded,filled\"]")?;
    w.attribute(Attr::quoted("size", "10,10"))?;
    w.attribute(Attr::raw("ratio", "compress"))?;
    w.blank()
}

/// Topology, devices and connections, in that order.
fn render_full(
    data: &NetworkData,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    topology::render(data, w, sink)?;
    w.blank()?;
    device::render(data, w, sink)?;
    w.blank()?;
    connection::render(data, w, sink)
}

/// The full view; intent rules are carried but not evaluated.
fn render_intent(
    data: &NetworkData,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    render_full(data, w, sink)?;
    w.blank()?;
    w.comment("Intent validation (not yet implemented)")
}

#[cfg(test)]
mod tests {
    use netdot_core::model::{Device, Links};
    use netdot_parser::error::DiagnosticCollector;

    use super::*;

    const PREAMBLE: &str = "digraph G {\n  rankdir=TB;\n  node [shape=box3d, style=\"rounded,filled\"];\n  size=\"10,10\";\n  ratio=compress;\n\n";

    fn render_ok(data: &NetworkData, view: ViewMode) -> String {
        let mut sink = DiagnosticCollector::new();
        let conversion = render(data, view, &mut sink);
        assert!(conversion.is_ok(), "{:?}", conversion.error());
        conversion.into_result().unwrap()
    }

    #[test]
    fn test_preamble_and_closing() {
        let dot = render_ok(&NetworkData::default(), ViewMode::Topology);
        assert!(dot.starts_with(PREAMBLE));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot, format!("{PREAMBLE}  // No topology data\n}}\n"));
    }

    #[test]
    fn test_empty_full_view_is_comments_only() {
        let dot = render_ok(&NetworkData::default(), ViewMode::Full);
        let body = dot
            .strip_prefix(PREAMBLE)
            .and_then(|rest| rest.strip_suffix("}\n"))
            .unwrap();
        assert_eq!(
            body,
            "  // No topology data\n\n  // No device data\n\n  // No connection data\n"
        );
    }

    #[test]
    fn test_intent_view_extends_full() {
        let data = NetworkData {
            devices: vec![Device {
                id: Some("sw1".to_string()),
                ..Device::default()
            }],
            ..NetworkData::default()
        };
        let full = render_ok(&data, ViewMode::Full);
        let intent = render_ok(&data, ViewMode::Intent);

        let full_body = full.strip_suffix("}\n").unwrap();
        assert_eq!(
            intent,
            format!("{full_body}\n  // Intent validation (not yet implemented)\n}}\n")
        );
    }

    #[test]
    fn test_hierarchical_slot_wins_over_view() {
        let data = NetworkData {
            links: Some(Links::default()),
            rack_servers: Some(RackServers::default()),
            site_equipment: Some(SiteEquipment::default()),
            ..NetworkData::default()
        };
        let dot = render_ok(&data, ViewMode::Connection);
        assert!(dot.contains("// No rack data"));
        assert!(!dot.contains("connection"));
    }

    #[test]
    fn test_target_names() {
        let data = NetworkData::default();
        assert_eq!(RenderTarget::resolve(&data, ViewMode::Device).name(), "device");

        let data = NetworkData {
            server_details: Some(ServerDetails::default()),
            ..NetworkData::default()
        };
        assert_eq!(
            RenderTarget::resolve(&data, ViewMode::Device).name(),
            "server-details"
        );
    }
}
