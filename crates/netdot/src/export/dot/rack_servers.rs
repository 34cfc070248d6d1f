//! Servers in one rack, their ports, and cables leaving the rack.

use std::fmt;

use log::debug;

use netdot_core::model::{RackServers, Server, ServerLink, ServerPort};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

use super::{
    Attr, DotWriter, NodeStyle,
    device::{PORT, port_edge},
    label_lines,
    site_equipment::anchor_attrs,
};

const SERVER: NodeStyle = NodeStyle::box3d("lightyellow", "orange", "2");

pub(super) fn render(
    doc: &RackServers,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    if doc.servers.is_empty() {
        return w.comment("No server data");
    }

    let anchor = doc.anchor_id();
    let label = doc.display_label();

    w.begin_cluster(&anchor)?;
    w.attribute(Attr::label(label))?;
    w.attribute(Attr::raw("style", "rounded"))?;
    w.attribute(Attr::raw("rankdir", "TB"))?;
    w.node(&anchor, &anchor_attrs(label))?;

    for server in &doc.servers {
        write_server(w, server)?;
    }

    let servers: Vec<&str> = doc.servers.iter().map(Server::id).collect();
    w.invisible_chain(&servers)?;
    w.end_block()?;
    w.blank()?;

    for server in &doc.servers {
        for link in &server.connections {
            write_link(w, server, link, sink)?;
        }
    }
    Ok(())
}

fn write_server(w: &mut DotWriter, server: &Server) -> fmt::Result {
    let label = label_lines([Some(server.display_label()), server.model.as_deref()])
        .unwrap_or_default();
    w.node(server.id(), &SERVER.attrs(label))?;

    for port in &server.ports {
        let port_id = format!("{}_{}", server.id(), port.id());
        w.node(&port_id, &PORT.attrs(port_label(port)))?;
        w.edge(server.id(), &port_id, &port_edge())?;
    }
    Ok(())
}

/// Port name, then `type speed [role]` when any of those are set.
pub(super) fn port_label(port: &ServerPort) -> String {
    label_lines([Some(port.display_label().to_string()), port.details()]).unwrap_or_default()
}

/// A cable from a port of `server` to `<device>_<port>` outside the rack.
fn write_link(
    w: &mut DotWriter,
    server: &Server,
    link: &ServerLink,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    let (Some(from), Some(to)) = (&link.from, &link.to) else {
        return Ok(());
    };
    let (Some(from_port), Some(to_device), Some(to_port)) = (
        from.port.as_deref(),
        to.device.as_deref(),
        to.port.as_deref(),
    ) else {
        debug!(server = server.id(); "Skipping incomplete server link");
        sink.emit(
            Diagnostic::warning(format!(
                "link from server `{}` needs `from.port`, `to.device` and `to.port`",
                server.id()
            ))
            .with_code(ErrorCode::E202),
        );
        return Ok(());
    };

    let attrs: Vec<Attr> = link.kind.iter().map(Attr::label).collect();
    w.edge(
        &format!("{}_{from_port}", server.id()),
        &format!("{to_device}_{to_port}"),
        &attrs,
    )
}
