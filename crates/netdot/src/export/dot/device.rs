//! Devices and their ports.

use std::fmt;

use netdot_core::model::NetworkData;
use netdot_parser::error::DiagnosticSink;

use super::{Attr, DotWriter, NodeStyle};

pub(super) const DEVICE: NodeStyle = NodeStyle::box3d("lightcyan", "cyan", "2");
pub(super) const PORT: NodeStyle = NodeStyle::tab("filled", "lightgray", "gray", "1");

/// Attributes of the dashed, arrowless edge from a device to one of its ports.
pub(super) fn port_edge() -> [Attr; 3] {
    [
        Attr::raw("style", "dashed"),
        Attr::raw("color", "gray"),
        Attr::raw("arrowhead", "none"),
    ]
}

pub(super) fn render(
    data: &NetworkData,
    w: &mut DotWriter,
    _sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    if data.devices.is_empty() {
        return w.comment("No device data");
    }

    for device in &data.devices {
        w.node(device.id(), &DEVICE.attrs(device.display_label()))?;

        for port in &device.ports {
            let port_id = format!("{}_{}", device.id(), port.id());
            w.node(&port_id, &PORT.attrs(port.display_label()))?;
            w.edge(device.id(), &port_id, &port_edge())?;
        }
    }
    Ok(())
}
