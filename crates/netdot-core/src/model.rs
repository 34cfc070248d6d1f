//! Typed network document model.
//!
//! This module contains the typed representation of documents after they
//! have been loaded and classified. The pipeline position mirrors the rest
//! of the workspace:
//!
//! ```text
//! Source Text
//!     ↓ load (netdot-parser)
//! Untyped value
//!     ↓ classify + lower
//! Document (these types)
//!     ↓ merge
//! NetworkData
//!     ↓ render (netdot)
//! DOT
//! ```
//!
//! # Organization
//!
//! - [`network`] - Flat family: [`Topology`], [`Device`], [`Links`], [`Intent`]
//! - [`site`] - Hierarchical family: [`SiteTopology`], [`SiteEquipment`],
//!   [`RackServers`], [`ServerDetails`]

pub mod network;
pub mod site;

pub use network::*;
pub use site::*;

use serde::{Deserialize, Deserializer, de};

use crate::{lenient::Scalar, shape::Shape};

/// Returns the label, falling back to the id, then to the empty string.
pub(crate) fn display_label<'a>(label: &'a Option<String>, id: &'a Option<String>) -> &'a str {
    label.as_deref().or(id.as_deref()).unwrap_or_default()
}

/// One end of a connection.
///
/// Older documents reference a device port as `{device, port}`; newer ones
/// name the device directly. The two forms are told apart once, while the
/// document is lowered: a mapping is a port reference, and any non-empty
/// scalar (`switch_01`, `101`) is a bare device id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A bare device id.
    Bare(String),
    /// A `{device, port}` mapping. `device` is `None` when the key is absent.
    Port(PortRef),
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Port(PortRef),
            Scalar(Scalar),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Port(port_ref) => Ok(Endpoint::Port(port_ref)),
            Raw::Scalar(scalar) => scalar
                .into_text()
                .map(Endpoint::Bare)
                .ok_or_else(|| de::Error::custom("endpoint is neither a device id nor a mapping")),
        }
    }
}

impl Endpoint {
    /// Returns the device id, if it can be resolved to a non-empty string.
    pub fn device(&self) -> Option<&str> {
        match self {
            Endpoint::Bare(id) => Some(id.as_str()),
            Endpoint::Port(port_ref) => port_ref.device.as_deref(),
        }
        .filter(|id| !id.is_empty())
    }

    /// Returns the port name, only ever present in the `{device, port}` form.
    pub fn port(&self) -> Option<&str> {
        match self {
            Endpoint::Bare(_) => None,
            Endpoint::Port(port_ref) => port_ref.port.as_deref(),
        }
    }
}

/// A classified, typed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Topology(Topology),
    Device(Device),
    Links(Links),
    Intent(Intent),
    SiteTopology(SiteTopology),
    SiteEquipment(SiteEquipment),
    RackServers(RackServers),
    ServerDetails(ServerDetails),
}

impl Document {
    /// Returns the shape of this document.
    pub fn shape(&self) -> Shape {
        match self {
            Document::Topology(_) => Shape::Topology,
            Document::Device(_) => Shape::Device,
            Document::Links(_) => Shape::Links,
            Document::Intent(_) => Shape::Intent,
            Document::SiteTopology(_) => Shape::SiteTopology,
            Document::SiteEquipment(_) => Shape::SiteEquipment,
            Document::RackServers(_) => Shape::RackServers,
            Document::ServerDetails(_) => Shape::ServerDetails,
        }
    }
}

/// The input to the renderers: one slot per document shape.
///
/// A single parsed document fills exactly one slot. Merging several flat
/// documents fills up to four: `topology` and `links` keep the last
/// document seen, while `devices` and `intents` accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkData {
    pub topology: Option<Topology>,
    pub devices: Vec<Device>,
    pub links: Option<Links>,
    pub intents: Vec<Intent>,
    pub site_topology: Option<SiteTopology>,
    pub site_equipment: Option<SiteEquipment>,
    pub rack_servers: Option<RackServers>,
    pub server_details: Option<ServerDetails>,
}

impl NetworkData {
    /// Folds another model into this one using the flat merge rules.
    ///
    /// Hierarchical slots of `other` are ignored; they are never merge
    /// targets. Returns `true` if `other` carried any hierarchical slot.
    pub fn merge_from(&mut self, other: NetworkData) -> bool {
        let dropped_hierarchical = other.has_hierarchical();

        if other.topology.is_some() {
            self.topology = other.topology;
        }
        if other.links.is_some() {
            self.links = other.links;
        }
        self.devices.extend(other.devices);
        self.intents.extend(other.intents);

        dropped_hierarchical
    }

    /// Returns `true` if any hierarchical slot is filled.
    pub fn has_hierarchical(&self) -> bool {
        self.site_topology.is_some()
            || self.site_equipment.is_some()
            || self.rack_servers.is_some()
            || self.server_details.is_some()
    }

    /// Returns `true` if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.topology.is_none()
            && self.devices.is_empty()
            && self.links.is_none()
            && self.intents.is_empty()
            && !self.has_hierarchical()
    }
}

impl From<Document> for NetworkData {
    fn from(document: Document) -> Self {
        let mut data = NetworkData::default();
        match document {
            Document::Topology(topology) => data.topology = Some(topology),
            Document::Device(device) => data.devices.push(device),
            Document::Links(links) => data.links = Some(links),
            Document::Intent(intent) => data.intents.push(intent),
            Document::SiteTopology(doc) => data.site_topology = Some(doc),
            Document::SiteEquipment(doc) => data.site_equipment = Some(doc),
            Document::RackServers(doc) => data.rack_servers = Some(doc),
            Document::ServerDetails(doc) => data.server_details = Some(doc),
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn device(id: &str) -> Device {
        Device {
            id: Some(id.to_string()),
            ..Device::default()
        }
    }

    fn topology(id: &str) -> Topology {
        Topology {
            id: Some(id.to_string()),
            ..Topology::default()
        }
    }

    fn data_of(devices: &[&str], topo: Option<&str>) -> NetworkData {
        NetworkData {
            devices: devices.iter().map(|id| device(id)).collect(),
            topology: topo.map(topology),
            ..NetworkData::default()
        }
    }

    #[test]
    fn test_endpoint_forms() {
        let bare: Endpoint = serde_yaml::from_str("switch_01").unwrap();
        assert_eq!(bare.device(), Some("switch_01"));
        assert_eq!(bare.port(), None);

        let port: Endpoint = serde_yaml::from_str("{device: srv, port: eth0}").unwrap();
        assert_eq!(port.device(), Some("srv"));
        assert_eq!(port.port(), Some("eth0"));

        let no_device: Endpoint = serde_yaml::from_str("{port: eth0}").unwrap();
        assert_eq!(no_device.device(), None);
        assert_eq!(no_device.port(), Some("eth0"));
    }

    #[test]
    fn test_numeric_endpoint_is_a_bare_id() {
        let numeric: Endpoint = serde_yaml::from_str("101").unwrap();
        assert_eq!(numeric, Endpoint::Bare("101".to_string()));
        assert_eq!(numeric.device(), Some("101"));

        let numeric_device: Endpoint = serde_yaml::from_str("{device: 7, port: 1}").unwrap();
        assert_eq!(numeric_device.device(), Some("7"));
        assert_eq!(numeric_device.port(), Some("1"));

        assert!(serde_yaml::from_str::<Endpoint>("''").is_err());
    }

    #[test]
    fn test_document_into_slot() {
        let data = NetworkData::from(Document::Device(device("a")));
        assert_eq!(data.devices.len(), 1);
        assert!(data.topology.is_none());

        let data = NetworkData::from(Document::RackServers(RackServers::default()));
        assert!(data.has_hierarchical());
        assert!(!data.is_empty());
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut merged = NetworkData::default();
        merged.merge_from(data_of(&[], Some("first")));
        merged.merge_from(data_of(&["x"], None));
        assert_eq!(merged.topology, Some(topology("first")));

        merged.merge_from(data_of(&[], Some("second")));
        assert_eq!(merged.topology, Some(topology("second")));
    }

    #[test]
    fn test_merge_drops_hierarchical() {
        let mut merged = NetworkData::default();
        let dropped = merged.merge_from(NetworkData::from(Document::SiteTopology(
            SiteTopology::default(),
        )));
        assert!(dropped);
        assert!(merged.is_empty());
    }

    proptest! {
        #[test]
        fn prop_device_accumulation_is_associative(
            a in proptest::collection::vec("[a-z]{1,4}", 0..4),
            b in proptest::collection::vec("[a-z]{1,4}", 0..4),
            c in proptest::collection::vec("[a-z]{1,4}", 0..4),
        ) {
            let to_data = |ids: &Vec<String>| {
                let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                data_of(&refs, None)
            };

            let mut left = NetworkData::default();
            left.merge_from(to_data(&a));
            left.merge_from(to_data(&b));
            let mut left_then_c = NetworkData::default();
            left_then_c.merge_from(left);
            left_then_c.merge_from(to_data(&c));

            let mut flat = NetworkData::default();
            flat.merge_from(to_data(&a));
            flat.merge_from(to_data(&b));
            flat.merge_from(to_data(&c));

            prop_assert_eq!(left_then_c.devices, flat.devices);
        }
    }
}
