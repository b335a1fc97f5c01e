//! Output model consumed by the external renderer. Plain serializable
//! structs; nothing here draws.

use crate::style::RoadClass;
use serde::{Deserialize, Serialize};

/// A projected screen position in pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: String,
}

/// One drawable road: projected vertices (one per input vertex) plus the
/// stroke of its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpedPath {
    pub class: RoadClass,
    pub stroke: Stroke,
    pub points: Vec<ScenePoint>,
}

/// A control point marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: ScenePoint,
    pub radius: f64,
    pub color: String,
}

/// Everything the renderer needs for one frame. Rebuilt from scratch on
/// every invocation; never cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadScene {
    pub paths: Vec<WarpedPath>,
    pub markers: Vec<Marker>,
}
