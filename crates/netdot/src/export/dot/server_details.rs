//! Internals of one server: drive bays, front panel, network ports, and
//! either its interaction sequences or its applications.

use std::fmt;

use log::debug;

use netdot_core::model::{
    Application, FrontPanelPort, Sequence, ServerDetails, ServerPort, Slot, SlotStatus,
};
use netdot_parser::error::{Diagnostic, DiagnosticSink, ErrorCode};

use super::{Attr, DotWriter, NodeStyle, label_lines, rack_servers::port_label};

const SERVER: NodeStyle = NodeStyle::box3d("lightyellow", "orange", "2");
const PARTICIPANT: NodeStyle = NodeStyle::box3d("lightblue", "blue", "2");
const APPLICATION: NodeStyle = NodeStyle::box3d("lightgreen", "green", "2");

/// A vertical cluster of nodes hanging off the server node.
struct Section<'a> {
    comment: &'static str,
    cluster: String,
    label: &'static str,
    nodes: Vec<(String, Vec<Attr>)>,
    server: &'a str,
}

impl Section<'_> {
    fn write(self, w: &mut DotWriter) -> fmt::Result {
        let Some((first, _)) = self.nodes.first() else {
            return Ok(());
        };
        let first = first.clone();

        w.comment(self.comment)?;
        w.begin_cluster(&self.cluster)?;
        w.attribute(Attr::label(self.label))?;
        w.attribute(Attr::raw("style", "rounded"))?;
        w.attribute(Attr::raw("rankdir", "TB"))?;

        let ids: Vec<&str> = self.nodes.iter().map(|(id, _)| id.as_str()).collect();
        for (id, attrs) in &self.nodes {
            w.node(id, attrs)?;
        }
        w.invisible_chain(&ids)?;
        w.end_block()?;
        w.blank()?;

        w.edge(self.server, &first, &[Attr::raw("style", "invis")])?;
        w.blank()
    }
}

pub(super) fn render(
    doc: &ServerDetails,
    w: &mut DotWriter,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    let key = doc.key();
    let server = format!("server_{key}");

    let hardware = doc.hardware.as_ref();
    let label = label_lines([
        Some(doc.display_label().to_string()),
        hardware.and_then(|hw| hw.model.clone()),
        hardware
            .and_then(|hw| hw.serial_number.as_deref())
            .map(|serial| format!("S/N: {serial}")),
    ])
    .unwrap_or_default();
    w.node(&server, &SERVER.attrs(label))?;
    w.blank()?;

    Section {
        comment: "Drive bays",
        cluster: format!("slots_{key}"),
        label: "Drive bays",
        nodes: doc.slots.iter().map(slot_node).collect(),
        server: &server,
    }
    .write(w)?;

    Section {
        comment: "Front panel",
        cluster: format!("front_ports_{key}"),
        label: "Front panel",
        nodes: doc.front_panel_ports.iter().map(front_panel_node).collect(),
        server: &server,
    }
    .write(w)?;

    Section {
        comment: "Network ports",
        cluster: format!("ports_{key}"),
        label: "Network ports",
        nodes: doc.ports.iter().map(network_port_node).collect(),
        server: &server,
    }
    .write(w)?;

    if !doc.sequences.is_empty() {
        w.comment("Sequences")?;
        for (index, sequence) in doc.sequences.iter().enumerate() {
            write_sequence(w, sequence, index, sink)?;
        }
    } else if !doc.applications.is_empty() {
        write_applications(w, &server, &doc.applications)?;
    }
    Ok(())
}

fn slot_node(slot: &Slot) -> (String, Vec<Attr>) {
    let status = slot
        .status
        .as_ref()
        .filter(|status| !matches!(status, SlotStatus::Empty))
        .map(SlotStatus::as_str)
        .filter(|status| !status.is_empty())
        .map(|status| format!("[{status}]"));
    let label = label_lines([
        Some(slot.display_label().to_string()),
        status,
        slot.capacity.clone(),
    ])
    .unwrap_or_default();

    let (fill, color) = match slot.status {
        Some(SlotStatus::Failed) => ("lightcoral", "red"),
        Some(SlotStatus::Installed) => ("lightgreen", "green"),
        _ => ("lightgray", "gray"),
    };
    (
        slot.node_id(),
        NodeStyle::box3d(fill, color, "1.5").attrs(label),
    )
}

fn front_panel_node(port: &FrontPanelPort) -> (String, Vec<Attr>) {
    let (fill, color) = match port.kind.as_deref() {
        Some("VGA") => ("lightblue", "blue"),
        Some("USB") => ("lightcyan", "cyan"),
        Some("button") => ("lightpink", "pink"),
        _ => ("lightgray", "gray"),
    };
    (
        port.node_id(),
        NodeStyle::tab("rounded,filled", fill, color, "1.5").attrs(port.display_label()),
    )
}

fn network_port_node(port: &ServerPort) -> (String, Vec<Attr>) {
    let label = label_lines([Some(port_label(port)), port.ip.clone()]).unwrap_or_default();
    let (fill, color) = match port.role.as_deref() {
        Some("management") => ("lightgreen", "green"),
        Some("public") => ("lightyellow", "orange"),
        Some("storage") => ("lavender", "purple"),
        Some("backup") => ("lightcoral", "red"),
        Some("unused") => ("lightgray", "gray"),
        _ => ("lightcyan", "cyan"),
    };
    (
        port.node_id(),
        NodeStyle::tab("rounded,filled", fill, color, "1.5").attrs(label),
    )
}

fn write_sequence(
    w: &mut DotWriter,
    sequence: &Sequence,
    index: usize,
    sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    if sequence.participants.is_empty() && sequence.steps.is_empty() {
        debug!(index; "Skipping empty sequence");
        sink.emit(
            Diagnostic::warning(format!(
                "sequence #{} has neither participants nor steps",
                index + 1
            ))
            .with_code(ErrorCode::E202),
        );
        return Ok(());
    }

    w.comment(&format!("Sequence: {}", sequence.display_label()))?;
    for participant in &sequence.participants {
        w.node(participant, &PARTICIPANT.attrs(participant.as_str()))?;
    }
    w.blank()?;

    for (step_index, step) in sequence.steps.iter().enumerate() {
        let (Some(from), Some(to)) = (step.from.as_deref(), step.to.as_deref()) else {
            sink.emit(
                Diagnostic::warning(format!(
                    "step #{} of sequence `{}` needs both `from` and `to`",
                    step_index + 1,
                    sequence.display_label()
                ))
                .with_code(ErrorCode::E202),
            );
            continue;
        };
        // The description only extends an existing message.
        let label = step.message.as_deref().map(|message| {
            label_lines([Some(message), step.description.as_deref()]).unwrap_or_default()
        });
        let attrs: Vec<Attr> = label.into_iter().map(Attr::label).collect();
        w.edge(from, to, &attrs)?;
    }
    w.blank()
}

fn write_applications(w: &mut DotWriter, server: &str, apps: &[Application]) -> fmt::Result {
    w.comment("Applications")?;
    for app in apps {
        let Some(name) = app.name.as_deref() else {
            continue;
        };
        let label = match app.port.as_deref() {
            Some(port) => format!("{name}:{port}"),
            None => name.to_string(),
        };
        w.node(name, &APPLICATION.attrs(label))?;
        w.edge(
            server,
            name,
            &[Attr::raw("style", "dashed"), Attr::raw("color", "gray")],
        )?;
    }
    w.blank()
}
