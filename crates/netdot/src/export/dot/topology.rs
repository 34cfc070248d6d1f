//! Layer clusters for the topology view.

use std::fmt;

use netdot_core::model::{Layer, NetworkData};
use netdot_parser::error::DiagnosticSink;

use super::{Attr, DotWriter, NodeStyle};

const LAYER: NodeStyle = NodeStyle::box3d("lightblue", "blue", "2");
const VARIANT: NodeStyle =
    NodeStyle::box3d("lightgray", "gray", "1.5").with_style("rounded,filled,dashed");

/// Prefix of layer node ids in a topology without networks.
const LEGACY_PREFIX: &str = "layer";

pub(super) fn render(
    data: &NetworkData,
    w: &mut DotWriter,
    _sink: &mut dyn DiagnosticSink,
) -> fmt::Result {
    let Some(topology) = &data.topology else {
        return w.comment("No topology data");
    };

    if topology.networks.is_empty() {
        if topology.layers.is_empty() {
            return w.comment("No topology data");
        }
        return write_layers(w, LEGACY_PREFIX, &topology.layers);
    }

    let mut rendered = 0usize;
    for network in topology.networks.iter().filter(|n| !n.layers.is_empty()) {
        let prefix = network.prefix();
        w.begin_cluster(prefix)?;
        w.attribute(Attr::label(network.display_label()))?;
        w.attribute(Attr::raw("style", "rounded"))?;
        write_layers(w, prefix, &network.layers)?;
        w.end_block()?;
        rendered += 1;
    }

    if rendered == 0 {
        w.comment("No topology data")?;
    }
    Ok(())
}

/// Layer nodes, their variants and the dashed chain in array order.
fn write_layers(w: &mut DotWriter, prefix: &str, layers: &[Layer]) -> fmt::Result {
    let ids: Vec<String> = layers
        .iter()
        .map(|layer| format!("{prefix}_{}", layer.id()))
        .collect();

    for (layer, layer_id) in layers.iter().zip(&ids) {
        w.node(layer_id, &LAYER.attrs(layer.display_label()))?;
        for variant in &layer.variants {
            let variant_id = format!("{prefix}_{}", variant.id());
            w.node(&variant_id, &VARIANT.attrs(variant.display_label()))?;
            w.edge(layer_id, &variant_id, &[Attr::raw("style", "dotted")])?;
        }
    }

    for pair in ids.windows(2) {
        w.edge(&pair[0], &pair[1], &[Attr::raw("style", "dashed")])?;
    }
    Ok(())
}
