//! Flat-family documents: topology, device, links and intent.
//!
//! These four kinds can be spread over many files and merged into one
//! [`NetworkData`](super::NetworkData) before rendering.

use serde::Deserialize;

use crate::lenient;

use super::{Endpoint, display_label};

/// Layered network topology.
///
/// A topology either groups its layers into [`Network`]s, or carries a
/// bare `layers` list directly (the older single-network form).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Topology {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub networks: Vec<Network>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Network {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub layers: Vec<Layer>,
}

impl Network {
    /// Namespace used to prefix layer node ids inside this network.
    pub fn prefix(&self) -> &str {
        self.id
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or("network")
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// One tier of a topology. Array order is layer order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Layer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub level: Option<f64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub variants: Vec<Variant>,
}

impl Layer {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// Alternate flavour of a layer, drawn next to its parent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Variant {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
}

impl Variant {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub location: Option<DeviceLocation>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ports: Vec<Port>,
}

impl Device {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceLocation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub rack: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Port {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub speed: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mac: Option<String>,
}

impl Port {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// A set of cable connections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub connections: Vec<Connection>,
}

/// A cable between two endpoints.
///
/// Shared by links documents and site-equipment documents; the latter also
/// uses `type`, `bandwidth` and `description`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Connection {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub from: Option<Endpoint>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub to: Option<Endpoint>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<LinkStatus>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cable_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cable_spec: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub location: Option<LinkLocation>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bandwidth: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl Connection {
    /// Cable description: `type` alone, or `type (spec)`.
    pub fn cable_info(&self) -> Option<String> {
        let cable_type = self.cable_type.as_deref()?;
        Some(match self.cable_spec.as_deref() {
            Some(spec) => format!("{cable_type} ({spec})"),
            None => cable_type.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Active,
    Inactive,
    Planned,
    #[serde(other)]
    Other,
}

/// Where the far end of a connection lives, relative to the near end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkLocation {
    OtherFloor,
    OtherRack,
    #[serde(other)]
    Other,
}

/// Declarative rules over the rest of the model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Intent {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rule {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub applies_to: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub validation: Option<Validation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Validation {
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub target_devices: Option<String>,
}
