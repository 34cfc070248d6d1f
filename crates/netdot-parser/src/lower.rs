//! Lowering from untyped values into typed documents.

use serde_yaml::Value;

use netdot_core::{model::Document, shape::Shape};

/// Read `value` as the typed document for `shape`.
///
/// The model's deserializers are lenient, so any mapping lowers; fields of
/// the wrong kind are treated as absent.
///
/// # Errors
///
/// Returns the loader's error for values the model cannot read at all, such
/// as a non-mapping root.
pub fn lower(value: Value, shape: Shape) -> Result<Document, serde_yaml::Error> {
    Ok(match shape {
        Shape::Topology => Document::Topology(serde_yaml::from_value(value)?),
        Shape::Device => Document::Device(serde_yaml::from_value(value)?),
        Shape::Links => Document::Links(serde_yaml::from_value(value)?),
        Shape::Intent => Document::Intent(serde_yaml::from_value(value)?),
        Shape::SiteTopology => Document::SiteTopology(serde_yaml::from_value(value)?),
        Shape::SiteEquipment => Document::SiteEquipment(serde_yaml::from_value(value)?),
        Shape::RackServers => Document::RackServers(serde_yaml::from_value(value)?),
        Shape::ServerDetails => Document::ServerDetails(serde_yaml::from_value(value)?),
    })
}
