//! Document shapes.
//!
//! Every parsed document is one of the eight [`Shape`]s below, or unknown.
//! Unknown is not a variant: classifiers return `Option<Shape>` and `None`
//! stands for a document that matches nothing.

use std::fmt;

/// The kind of a network document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Network layers, optionally grouped into networks.
    Topology,
    /// A single device and its ports.
    Device,
    /// Device-to-device cabling.
    Links,
    /// Declarative rules over the other flat documents.
    Intent,
    /// Sites and the WAN links between them.
    SiteTopology,
    /// Racks and equipment inside one site.
    SiteEquipment,
    /// Servers inside one rack.
    RackServers,
    /// Internals of one server.
    ServerDetails,
}

/// Which merge family a [`Shape`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Documents that can be merged across files before rendering.
    Flat,
    /// Self-contained documents that always render standalone.
    Hierarchical,
}

impl Shape {
    /// All shapes, hierarchical first, in classification priority order.
    pub const ALL: [Shape; 8] = [
        Shape::SiteTopology,
        Shape::SiteEquipment,
        Shape::RackServers,
        Shape::ServerDetails,
        Shape::Topology,
        Shape::Device,
        Shape::Links,
        Shape::Intent,
    ];

    /// Returns the `type:` tag that names this shape in a document.
    pub fn tag(self) -> &'static str {
        match self {
            Shape::Topology => "topology",
            Shape::Device => "device",
            Shape::Links => "links",
            Shape::Intent => "intent",
            Shape::SiteTopology => "site-topology",
            Shape::SiteEquipment => "site-equipment",
            Shape::RackServers => "rack-servers",
            Shape::ServerDetails => "server-details",
        }
    }

    /// Looks a shape up by its `type:` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.tag() == tag)
    }

    /// Returns the merge family of this shape.
    pub fn family(self) -> Family {
        match self {
            Shape::Topology | Shape::Device | Shape::Links | Shape::Intent => Family::Flat,
            Shape::SiteTopology
            | Shape::SiteEquipment
            | Shape::RackServers
            | Shape::ServerDetails => Family::Hierarchical,
        }
    }

    /// Returns `true` for shapes that can be merged.
    pub fn is_flat(self) -> bool {
        self.family() == Family::Flat
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
