//! Racks and equipment inside one site.
//!
//! Each rack is a cluster whose first node is an anchor carrying the rack
//! id. Equipment is ordered top to bottom by an invisible chain starting at
//! the anchor, and when there is more than one rack the anchors share a rank
//! so the racks line up side by side.

use std::fmt;

use log::debug;

use netdot_core::model::{Connection, Endpoint, Equipment, Rack, SiteEquipment};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

use super::{Attr, DotWriter, NodeStyle, label_lines};

/// Rack anchor node.
pub(super) fn anchor_attrs(label: &str) -> Vec<Attr> {
    let mut attrs = NodeStyle::box3d("lightgray", "gray", "2").attrs(label);
    attrs.push(Attr::raw("fontcolor", "white"));
    attrs
}

fn equipment_style(equipment: &Equipment) -> NodeStyle {
    let (fill, color) = match equipment.kind.as_deref() {
        Some("server") => ("lightyellow", "orange"),
        Some("switch") => ("lightcyan", "cyan"),
        Some("router") => ("lightpink", "pink"),
        _ => ("lightgray", "gray"),
    };
    NodeStyle::box3d(fill, color, "1.5")
}

pub(super) fn render(
    doc: &SiteEquipment,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    if doc.racks.is_empty() {
        return w.comment("No rack data");
    }

    for rack in &doc.racks {
        write_rack(w, rack)?;
    }

    if doc.racks.len() > 1 {
        let anchors: Vec<&str> = doc.racks.iter().map(Rack::id).collect();
        w.rank_same(&anchors)?;
    }
    w.blank()?;

    for (index, conn) in doc.connections.iter().enumerate() {
        let Some((from, to)) = endpoints(conn) else {
            debug!(index; "Skipping malformed equipment connection");
            sink.emit(unresolved(conn, index));
            continue;
        };
        w.edge(from, to, &connection_attrs(conn))?;
    }
    Ok(())
}

/// Device ids of both ends, when both are present, written in the same
/// form and name a device.
fn endpoints(conn: &Connection) -> Option<(&str, &str)> {
    match (conn.from.as_ref()?, conn.to.as_ref()?) {
        (from @ Endpoint::Bare(_), to @ Endpoint::Bare(_))
        | (from @ Endpoint::Port(_), to @ Endpoint::Port(_)) => {
            Some((from.device()?, to.device()?))
        }
        _ => None,
    }
}

fn unresolved(conn: &Connection, index: usize) -> Diagnostic {
    let name = conn
        .id
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1));
    let mixed = matches!(
        (&conn.from, &conn.to),
        (Some(Endpoint::Bare(_)), Some(Endpoint::Port(_)))
            | (Some(Endpoint::Port(_)), Some(Endpoint::Bare(_)))
    );
    let message = if mixed {
        format!("equipment connection `{name}` mixes a bare device id with a `{{device, port}}` mapping")
    } else {
        format!("equipment connection `{name}` does not name a device on both ends")
    };
    Diagnostic::warning(message)
        .with_code(ErrorCode::E200)
        .with_help("write both ends as bare device ids, or both as `{device, port}`")
}

fn write_rack(w: &mut DotWriter, rack: &Rack) -> fmt::Result {
    w.begin_cluster(rack.id())?;
    w.attribute(Attr::label(rack.display_label()))?;
    w.attribute(Attr::raw("style", "rounded"))?;
    w.attribute(Attr::raw("rankdir", "LR"))?;

    w.node(rack.id(), &anchor_attrs(rack.display_label()))?;

    let mut order = vec![rack.id()];
    for equipment in &rack.equipment {
        w.node(
            equipment.id(),
            &equipment_style(equipment).attrs(equipment.display_label()),
        )?;
        order.push(equipment.id());
    }
    w.invisible_chain(&order)?;
    w.end_block()
}

/// Label lines: port pair, type, bandwidth, network, description.
fn connection_attrs(conn: &Connection) -> Vec<Attr> {
    let ports = match (
        conn.from.as_ref().and_then(|e| e.port()),
        conn.to.as_ref().and_then(|e| e.port()),
    ) {
        (Some(from), Some(to)) => Some(format!("{from} → {to}")),
        _ => None,
    };

    let mut attrs = Vec::new();
    let label = label_lines([
        ports,
        conn.kind.clone(),
        conn.bandwidth.clone(),
        conn.network.clone(),
        conn.description.clone(),
    ]);
    if let Some(label) = label {
        attrs.push(Attr::label(label));
    }

    let color = if conn.kind.as_deref() == Some("fiber") {
        "orange"
    } else {
        "blue"
    };
    attrs.push(Attr::raw("color", color));
    attrs
}

#[cfg(test)]
mod tests {
    use netdot_core::model::PortRef;
    use netdot_parser::error::DiagnosticCollector;

    use super::*;

    fn rack(id: &str, equipment: &[(&str, &str)]) -> Rack {
        Rack {
            id: Some(id.to_string()),
            label: None,
            equipment: equipment
                .iter()
                .map(|(id, kind)| Equipment {
                    id: Some(id.to_string()),
                    kind: Some(kind.to_string()),
                    ..Equipment::default()
                })
                .collect(),
        }
    }

    fn render_doc(doc: &SiteEquipment) -> (String, DiagnosticCollector) {
        let mut w = DotWriter::new();
        let mut sink = DiagnosticCollector::new();
        render(doc, &mut w, &mut sink).unwrap();
        (w.finish(), sink)
    }

    #[test]
    fn test_rack_cluster_with_ordering_chain() {
        let doc = SiteEquipment {
            racks: vec![rack("r1", &[("sw1", "switch"), ("srv1", "server")])],
            ..SiteEquipment::default()
        };
        let (dot, _) = render_doc(&doc);

        assert!(dot.starts_with("subgraph cluster_r1 {\n  label=\"r1\";\n  style=rounded;\n  rankdir=LR;\n"));
        assert!(dot.contains(
            "  r1 [label=\"r1\", shape=box3d, style=\"rounded,filled\", fillcolor=lightgray, color=gray, penwidth=2, fontcolor=white];\n"
        ));
        assert!(dot.contains("sw1 [label=\"sw1\", shape=box3d, style=\"rounded,filled\", fillcolor=lightcyan, color=cyan, penwidth=1.5];"));
        assert!(dot.contains("fillcolor=lightyellow, color=orange"));
        assert!(dot.contains("  r1 -> sw1 [style=invis];\n  sw1 -> srv1 [style=invis];\n"));
        assert!(!dot.contains("rank=same"));
    }

    #[test]
    fn test_connection_shapes() {
        let doc = SiteEquipment {
            racks: vec![rack("r1", &[("a", "switch")]), rack("r2", &[("b", "router")])],
            connections: vec![
                Connection {
                    from: Some(Endpoint::Port(PortRef {
                        device: Some("a".to_string()),
                        port: Some("xe-1".to_string()),
                    })),
                    to: Some(Endpoint::Port(PortRef {
                        device: Some("b".to_string()),
                        port: Some("xe-2".to_string()),
                    })),
                    kind: Some("fiber".to_string()),
                    ..Connection::default()
                },
                Connection {
                    from: Some(Endpoint::Bare("b".to_string())),
                    to: Some(Endpoint::Bare("a".to_string())),
                    bandwidth: Some("10G".to_string()),
                    network: Some("mgmt".to_string()),
                    ..Connection::default()
                },
                Connection {
                    from: Some(Endpoint::Bare("a".to_string())),
                    to: Some(Endpoint::Port(PortRef::default())),
                    ..Connection::default()
                },
            ],
            ..SiteEquipment::default()
        };
        let (dot, sink) = render_doc(&doc);

        assert!(dot.contains("{ rank=same; r1; r2; }\n"));
        assert!(dot.contains("a -> b [label=\"xe-1 → xe-2\\nfiber\", color=orange];"));
        assert!(dot.contains("b -> a [label=\"10G\\nmgmt\", color=blue];"));
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_unusable_connections_are_reported() {
        let bare = |id: &str| Some(Endpoint::Bare(id.to_string()));
        let doc = SiteEquipment {
            racks: vec![rack("r1", &[("101", "server"), ("102", "switch")])],
            connections: vec![
                Connection {
                    id: Some("half".to_string()),
                    from: bare("101"),
                    ..Connection::default()
                },
                Connection {
                    id: Some("mixed".to_string()),
                    from: bare("101"),
                    to: Some(Endpoint::Port(PortRef {
                        device: Some("102".to_string()),
                        port: Some("1".to_string()),
                    })),
                    ..Connection::default()
                },
                Connection::default(),
            ],
            ..SiteEquipment::default()
        };
        let (dot, sink) = render_doc(&doc);

        assert!(!dot.contains("color=blue"));
        let messages: Vec<_> = sink.diagnostics().iter().map(|d| d.message()).collect();
        assert_eq!(
            messages,
            vec![
                "equipment connection `half` does not name a device on both ends",
                "equipment connection `mixed` mixes a bare device id with a `{device, port}` mapping",
                "equipment connection `#3` does not name a device on both ends",
            ]
        );
        assert!(sink.diagnostics().iter().all(|d| d.code() == Some(ErrorCode::E200)));
    }

    #[test]
    fn test_no_racks() {
        let (dot, _) = render_doc(&SiteEquipment::default());
        assert_eq!(dot, "// No rack data\n");
    }
}
