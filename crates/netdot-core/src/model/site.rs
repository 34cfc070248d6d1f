//! Hierarchical-family documents: site, rack and server levels.
//!
//! Each of these documents is self-contained and rendered on its own; they
//! are never merged with siblings.

use serde::Deserialize;

use crate::lenient::{self, DisplayNumber};

use super::{Connection, display_label};

/// Sites and the links between them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteTopology {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sites: Vec<Site>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub connections: Vec<SiteLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Site {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub location: Option<GeoLocation>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub capacity: Option<SiteCapacity>,
}

impl Site {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeoLocation {
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteCapacity {
    #[serde(default, deserialize_with = "lenient::number")]
    pub racks: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub power: Option<f64>,
}

impl SiteCapacity {
    /// Summary such as `12 racks, 40 kW`, or `None` when nothing is set.
    ///
    /// Zero values count as unset.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(racks) = self.racks.filter(|r| *r != 0.0) {
            parts.push(format!("{} racks", DisplayNumber(racks)));
        }
        if let Some(power) = self.power.filter(|p| *p != 0.0) {
            parts.push(format!("{} kW", DisplayNumber(power)));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// A WAN link between two sites, referenced by bare site id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteLink {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub to: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bandwidth: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub latency: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

/// Racks and equipment inside one site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteEquipment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "siteId", default, deserialize_with = "lenient::text")]
    pub site_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub racks: Vec<Rack>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rack {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub equipment: Vec<Equipment>,
}

impl Rack {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Equipment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,
}

impl Equipment {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// Servers mounted in one rack.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RackServers {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "rackId", default, deserialize_with = "lenient::text")]
    pub rack_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub servers: Vec<Server>,
}

impl RackServers {
    /// Raw id of the rack anchor node: `rackId`, else `rack_<id>`.
    pub fn anchor_id(&self) -> String {
        match &self.rack_id {
            Some(rack_id) => rack_id.clone(),
            None => format!("rack_{}", self.id.as_deref().unwrap_or("unknown")),
        }
    }

    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.rack_id.as_deref())
            .unwrap_or("Rack")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ports: Vec<ServerPort>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub connections: Vec<ServerLink>,
}

impl Server {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// A network port on a server, with the details shown in its label.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerPort {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub speed: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mac: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ip: Option<String>,
}

impl ServerPort {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }

    /// Raw node id inside a server details view: `id`, else `port_<label>`.
    pub fn node_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("port_{}", self.label.as_deref().unwrap_or_default()),
        }
    }

    /// `type speed [role]`, skipping whatever is missing.
    pub fn details(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.kind.clone());
        parts.extend(self.speed.clone());
        parts.extend(self.role.as_ref().map(|role| format!("[{role}]")));
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// A port of this server cabled to a port on a device outside the rack.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerLink {
    #[serde(default, deserialize_with = "lenient::option")]
    pub from: Option<PortRef>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub to: Option<PortRef>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
}

/// A `{device, port}` pair; either half may be missing in hand-written input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PortRef {
    #[serde(default, deserialize_with = "lenient::text")]
    pub device: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub port: Option<String>,
}

/// Internals of a single server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDetails {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub server_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub os: Option<OsInfo>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub hardware: Option<Hardware>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub slots: Vec<Slot>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub front_panel_ports: Vec<FrontPanelPort>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ports: Vec<ServerPort>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sequences: Vec<Sequence>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub applications: Vec<Application>,
}

impl ServerDetails {
    /// Suffix used to namespace the server node and its clusters.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or("details")
    }

    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("Server details")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OsInfo {
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub distribution: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub kernel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub manufacturer: Option<String>,
}

/// A drive bay.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Slot {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<SlotStatus>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub capacity: Option<String>,
}

impl Slot {
    /// Raw node id: `id`, else `slot_<label>`.
    pub fn node_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("slot_{}", self.label.as_deref().unwrap_or_default()),
        }
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// Drive bay state. Unrecognized values keep their text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SlotStatus {
    Empty,
    Installed,
    Failed,
    Other(String),
}

impl SlotStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SlotStatus::Empty => "empty",
            SlotStatus::Installed => "installed",
            SlotStatus::Failed => "failed",
            SlotStatus::Other(status) => status,
        }
    }
}

impl From<String> for SlotStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "empty" => SlotStatus::Empty,
            "installed" => SlotStatus::Installed,
            "failed" => SlotStatus::Failed,
            _ => SlotStatus::Other(status),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrontPanelPort {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
}

impl FrontPanelPort {
    /// Raw node id: `id`, else `port_<label>`.
    pub fn node_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("port_{}", self.label.as_deref().unwrap_or_default()),
        }
    }

    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

/// A participant/step interaction diagram.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sequence {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub participants: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub steps: Vec<Step>,
}

impl Sequence {
    pub fn display_label(&self) -> &str {
        display_label(&self.label, &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "lenient::text")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Application {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub port: Option<String>,
}
