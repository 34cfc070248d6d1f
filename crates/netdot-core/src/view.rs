//! View modes for the flat document family.
//!
//! A [`ViewMode`] selects which renderers the dispatcher runs for merged
//! topology, device, links and intent documents. Each mode also carries a
//! [`ViewDescriptor`] that callers use to decide which toggles to show; the
//! dispatcher itself only looks at the mode.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A named rendering strategy for flat documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Layer clusters only.
    Topology,
    /// Devices and their ports.
    Device,
    /// Devices referenced by links, and the links themselves.
    Connection,
    /// Topology, devices and connections together.
    #[default]
    Full,
    /// The full view, reserved for intent rule highlighting.
    Intent,
}

/// Which document slots a view draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Includes {
    pub topology: bool,
    pub devices: bool,
    pub links: bool,
    pub intents: bool,
}

/// Human-facing description of a [`ViewMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub label: &'static str,
    pub description: &'static str,
    pub includes: Includes,
}

/// Error returned when a view tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode `{0}` (expected one of: topology, device, connection, full, intent)")]
pub struct ParseViewModeError(String);

impl ViewMode {
    pub const ALL: [ViewMode; 5] = [
        ViewMode::Topology,
        ViewMode::Device,
        ViewMode::Connection,
        ViewMode::Full,
        ViewMode::Intent,
    ];

    /// Returns the lowercase tag of this mode.
    pub fn tag(self) -> &'static str {
        match self {
            ViewMode::Topology => "topology",
            ViewMode::Device => "device",
            ViewMode::Connection => "connection",
            ViewMode::Full => "full",
            ViewMode::Intent => "intent",
        }
    }

    /// Returns the descriptor for this mode.
    pub fn descriptor(self) -> ViewDescriptor {
        let (label, description, includes) = match self {
            ViewMode::Topology => (
                "Topology View",
                "Layer structure only",
                (true, false, false, false),
            ),
            ViewMode::Device => (
                "Device View",
                "Devices and their ports",
                (true, true, false, false),
            ),
            ViewMode::Connection => (
                "Connection View",
                "Connections only",
                (false, true, true, false),
            ),
            ViewMode::Full => (
                "Full View",
                "Everything combined",
                (true, true, true, false),
            ),
            ViewMode::Intent => (
                "Intent View",
                "Highlight rule violations",
                (true, true, true, true),
            ),
        };
        let (topology, devices, links, intents) = includes;
        ViewDescriptor {
            label,
            description,
            includes: Includes {
                topology,
                devices,
                links,
                intents,
            },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.tag() == wanted)
            .ok_or_else(|| ParseViewModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(ViewMode::default(), ViewMode::Full);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("connection".parse::<ViewMode>(), Ok(ViewMode::Connection));
        assert_eq!(" Intent ".parse::<ViewMode>(), Ok(ViewMode::Intent));
        assert!("graph".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_descriptor_includes() {
        let connection = ViewMode::Connection.descriptor().includes;
        assert!(!connection.topology);
        assert!(connection.devices && connection.links);
        assert!(!connection.intents);

        assert!(ViewMode::Intent.descriptor().includes.intents);
        assert_eq!(ViewMode::Full.descriptor().label, "Full View");
    }

    #[test]
    fn test_tag_round_trip() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>(), Ok(mode));
        }
    }
}
