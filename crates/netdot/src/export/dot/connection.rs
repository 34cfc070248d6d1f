//! Devices referenced by links, and the links themselves.

use std::fmt;

use indexmap::IndexSet;
use log::debug;

use netdot_core::model::{Connection, LinkLocation, LinkStatus, NetworkData};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

use super::{Attr, DotWriter, device::DEVICE, label_lines};

pub(super) fn render(
    data: &NetworkData,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    let connections = match &data.links {
        Some(links) if !links.connections.is_empty() => &links.connections,
        _ => return w.comment("No connection data"),
    };

    let devices: IndexSet<&str> = connections
        .iter()
        .flat_map(|conn| [conn.from.as_ref(), conn.to.as_ref()])
        .flatten()
        .filter_map(|endpoint| endpoint.device())
        .collect();

    for device in &devices {
        w.node(device, &DEVICE.attrs(*device))?;
    }
    w.blank()?;

    for (index, conn) in connections.iter().enumerate() {
        let (Some(from), Some(to)) = (
            conn.from.as_ref().and_then(|e| e.device()),
            conn.to.as_ref().and_then(|e| e.device()),
        ) else {
            debug!(index; "Skipping connection with unresolved endpoint");
            sink.emit(unresolved(conn, index));
            continue;
        };
        w.edge(from, to, &edge_attrs(conn))?;
    }
    Ok(())
}

fn unresolved(conn: &Connection, index: usize) -> Diagnostic {
    let name = conn
        .id
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1));
    Diagnostic::warning(format!(
        "connection `{name}` does not name a device on both ends"
    ))
    .with_code(ErrorCode::E200)
    .with_help("write endpoints as `{device, port}` or a bare device id")
}

/// Port pair and cable on the label; status and location as dashed colors.
///
/// Status and location rules are applied independently and both may add
/// attributes to the same edge.
fn edge_attrs(conn: &Connection) -> Vec<Attr> {
    let mut attrs = Vec::new();

    let from_port = conn.from.as_ref().and_then(|e| e.port());
    let to_port = conn.to.as_ref().and_then(|e| e.port());
    let ports = match (from_port, to_port) {
        (Some(from), Some(to)) => Some(format!("{from} → {to}")),
        (Some(from), None) => Some(from.to_string()),
        _ => None,
    };
    if let Some(label) = label_lines([ports, conn.cable_info()]) {
        attrs.push(Attr::label(label));
    }

    if conn.status == Some(LinkStatus::Inactive) {
        attrs.push(Attr::raw("style", "dashed"));
        attrs.push(Attr::raw("color", "gray"));
    }
    match conn.location {
        Some(LinkLocation::OtherFloor) => {
            attrs.push(Attr::raw("color", "red"));
            attrs.push(Attr::raw("style", "dashed"));
        }
        Some(LinkLocation::OtherRack) => {
            attrs.push(Attr::raw("color", "orange"));
            attrs.push(Attr::raw("style", "dashed"));
        }
        Some(LinkLocation::Other) | None => {}
    }
    attrs
}

#[cfg(test)]
mod tests {
    use netdot_core::model::{Endpoint, Links, PortRef};
    use netdot_parser::error::DiagnosticCollector;

    use super::*;

    fn port(device: &str, port: &str) -> Option<Endpoint> {
        Some(Endpoint::Port(PortRef {
            device: Some(device.to_string()),
            port: Some(port.to_string()),
        }))
    }

    fn render_links(connections: Vec<Connection>) -> (String, DiagnosticCollector) {
        let data = NetworkData {
            links: Some(Links {
                connections,
                ..Links::default()
            }),
            ..NetworkData::default()
        };
        let mut w = DotWriter::new();
        let mut sink = DiagnosticCollector::new();
        render(&data, &mut w, &mut sink).unwrap();
        (w.finish(), sink)
    }

    #[test]
    fn test_inactive_connection() {
        let (dot, sink) = render_links(vec![Connection {
            id: Some("c1".to_string()),
            from: port("A", "p1"),
            to: port("B", "p2"),
            status: Some(LinkStatus::Inactive),
            ..Connection::default()
        }]);

        assert!(dot.starts_with("A [label=\"A\""));
        assert!(dot.contains("\nB [label=\"B\""));
        assert!(dot.contains("A -> B [label=\"p1 → p2\", style=dashed, color=gray];"));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_cable_info_on_second_line() {
        let (dot, _) = render_links(vec![Connection {
            from: port("A", "p1"),
            to: port("B", "p2"),
            cable_type: Some("fiber".to_string()),
            cable_spec: Some("OM4".to_string()),
            ..Connection::default()
        }]);
        assert!(dot.contains("A -> B [label=\"p1 → p2\\nfiber (OM4)\"];"));

        let (dot, _) = render_links(vec![Connection {
            from: Some(Endpoint::Bare("A".to_string())),
            to: Some(Endpoint::Bare("B".to_string())),
            cable_type: Some("cat6".to_string()),
            ..Connection::default()
        }]);
        assert!(dot.contains("A -> B [label=\"cat6\"];"));
    }

    #[test]
    fn test_status_and_location_combine() {
        let (dot, _) = render_links(vec![Connection {
            from: Some(Endpoint::Bare("A".to_string())),
            to: Some(Endpoint::Bare("B".to_string())),
            status: Some(LinkStatus::Inactive),
            location: Some(LinkLocation::OtherFloor),
            ..Connection::default()
        }]);
        assert!(dot.contains(
            "A -> B [style=dashed, color=gray, color=red, style=dashed];"
        ));
    }

    #[test]
    fn test_plain_edge_and_distinct_devices() {
        let (dot, _) = render_links(vec![
            Connection {
                from: Some(Endpoint::Bare("A".to_string())),
                to: Some(Endpoint::Bare("B".to_string())),
                ..Connection::default()
            },
            Connection {
                from: Some(Endpoint::Bare("B".to_string())),
                to: Some(Endpoint::Bare("A".to_string())),
                location: Some(LinkLocation::OtherRack),
                ..Connection::default()
            },
        ]);
        assert_eq!(dot.matches("[label=\"A\"").count(), 1);
        assert!(dot.contains("A -> B;\n"));
        assert!(dot.contains("B -> A [color=orange, style=dashed];"));
    }

    #[test]
    fn test_unresolved_endpoint_is_skipped() {
        let (dot, sink) = render_links(vec![Connection {
            id: Some("c9".to_string()),
            from: Some(Endpoint::Port(PortRef {
                device: None,
                port: Some("p1".to_string()),
            })),
            to: Some(Endpoint::Bare("B".to_string())),
            ..Connection::default()
        }]);

        assert!(!dot.contains("->"));
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].code(), Some(ErrorCode::E200));
        assert!(sink.diagnostics()[0].message().contains("c9"));
    }
}
