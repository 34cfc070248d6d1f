//! Sites and the WAN links between them.

use std::{collections::HashSet, fmt};

use log::debug;

use netdot_core::model::{Site, SiteTopology};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

use super::{Attr, DotWriter, NodeStyle, label_lines};

const SITE: NodeStyle = NodeStyle::box3d("lightblue", "blue", "2");

pub(super) fn render(
    doc: &SiteTopology,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    if doc.sites.is_empty() {
        return w.comment("No site data");
    }

    for site in &doc.sites {
        w.node(site.id(), &SITE.attrs(site_label(site)))?;
    }
    w.blank()?;

    let declared: HashSet<&str> = doc.sites.iter().map(Site::id).collect();

    for link in &doc.connections {
        let (Some(from), Some(to)) = (link.from.as_deref(), link.to.as_deref()) else {
            continue;
        };

        if let Some(missing) = [from, to].into_iter().find(|id| !declared.contains(id)) {
            debug!(from, to; "Skipping link to undeclared site");
            sink.emit(
                Diagnostic::warning(format!("link `{from} -> {to}` names undeclared site `{missing}`"))
                    .with_code(ErrorCode::E201)
                    .with_help("declare the site under `sites:` or fix the id"),
            );
            continue;
        }

        let mut attrs = Vec::new();
        let label = label_lines([
            link.kind.as_deref(),
            link.bandwidth.as_deref(),
            link.latency.as_deref(),
        ]);
        if let Some(label) = label {
            attrs.push(Attr::label(label));
        }
        if link.provider.is_some() {
            attrs.push(Attr::raw("color", "blue"));
        }
        w.edge(from, to, &attrs)?;
    }
    Ok(())
}

/// Label, address, then `[N racks, P kW]`.
fn site_label(site: &Site) -> String {
    // A location without an address still adds an empty line.
    let address = site
        .location
        .as_ref()
        .map(|location| location.address.clone().unwrap_or_default());
    let capacity = site
        .capacity
        .as_ref()
        .and_then(|capacity| capacity.summary())
        .map(|summary| format!("[{summary}]"));

    label_lines([Some(site.display_label().to_string()), address, capacity]).unwrap_or_default()
}
