//! Road classification and the fixed style table.
//!
//! Classification is a closed enum: tile properties are parsed once into
//! [`RoadClass`] and unknown values become a typed skip (`None`) instead of a
//! string-comparison fallthrough at draw time.

use crate::model::Stroke;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    Service,
    Residential,
    Tertiary,
    Secondary,
    Primary,
    Trunk,
    Motorway,
}

impl RoadClass {
    /// Parses the `type` property of a road feature. Unknown classifications
    /// return `None` and the feature is skipped.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "service" => Some(RoadClass::Service),
            "residential" => Some(RoadClass::Residential),
            "tertiary" => Some(RoadClass::Tertiary),
            "secondary" => Some(RoadClass::Secondary),
            "primary" => Some(RoadClass::Primary),
            "trunk" => Some(RoadClass::Trunk),
            "motorway" => Some(RoadClass::Motorway),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadClass::Service => "service",
            RoadClass::Residential => "residential",
            RoadClass::Tertiary => "tertiary",
            RoadClass::Secondary => "secondary",
            RoadClass::Primary => "primary",
            RoadClass::Trunk => "trunk",
            RoadClass::Motorway => "motorway",
        }
    }

    /// Whether the class is part of the drawn set. Minor classes keep a
    /// style entry but are left out of scenes.
    pub fn is_rendered(self) -> bool {
        !matches!(self, RoadClass::Service | RoadClass::Residential)
    }

    /// Stroke width (px) and color for this class.
    pub fn stroke(self) -> Stroke {
        let (width, color) = match self {
            RoadClass::Service => (0.5, "rgba(0,0,0,0.1)"),
            RoadClass::Residential => (1.0, "rgba(0,0,0,0.2)"),
            RoadClass::Tertiary => (2.0, "rgba(0,0,0,0.4)"),
            RoadClass::Secondary => (3.0, "rgba(0,0,0,0.6)"),
            RoadClass::Primary => (4.0, "rgba(0,0,0,0.8)"),
            RoadClass::Trunk => (5.0, "rgba(0,0,0,0.8)"),
            RoadClass::Motorway => (6.0, "yellow"),
        };
        Stroke {
            width,
            color: color.to_string(),
        }
    }
}

/// Control point markers: fixed radius and color.
pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_COLOR: &str = "red";
