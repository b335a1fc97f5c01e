//! Tile-space input model and the source abstraction.
//!
//! Road layers arrive already decoded (fetching and wire decoding belong to
//! the tile collaborator); geometry is in tile-local integer coordinates with
//! an extent denominator. This module owns the tile-to-geographic conversion
//! and a runtime-agnostic async [`TileSource`] trait.

use serde::{Deserialize, Serialize};
use spacetime_core::geom::{GeoPoint, geo};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;
use std::future::Future;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Converts tile-local coordinates to geographic degrees: longitude is
    /// linear in tile x, latitude comes from the inverse Mercator of tile y.
    /// `extent` is the tile's coordinate denominator (4096 for MVT).
    pub fn tile_to_geographic(&self, x: f64, y: f64, extent: f64) -> GeoPoint {
        let extent = extent.max(1.0);
        let n = 2f64.powi(self.z as i32);
        let lon = (self.x as f64 + x / extent) / n * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * (self.y as f64 + y / extent) / n))
            .sinh()
            .atan();
        geo(lon, lat_rad.to_degrees())
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Point,
    Line,
    Polygon,
}

/// A vertex in tile-local integer coordinates. Values may fall outside
/// `[0, extent]` for geometry extending into the tile buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

/// One classified feature of a tile's road layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadFeature {
    /// Raw classification property; parsed into a `RoadClass` at draw time.
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry_type: GeometryType,
    pub points: Vec<TilePoint>,
}

/// The decoded road layer of one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRoads {
    pub extent: u32,
    pub features: Vec<RoadFeature>,
}

/// Supplies decoded road layers per tile. Implementations typically fetch
/// bytes over the network and decode them; both concerns stay outside this
/// crate. `Ok(None)` means the tile exists but carries no road layer.
///
/// The returned future is executor-free; callers pick the runtime.
pub trait TileSource {
    fn load_roads(
        &self,
        coord: TileCoord,
    ) -> impl Future<Output = std::result::Result<Option<TileRoads>, BoxError>>;
}

/// In-memory tile source, for tests and pre-decoded snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemoryTileSource {
    tiles: HashMap<TileCoord, TileRoads>,
}

impl MemoryTileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coord: TileCoord, roads: TileRoads) {
        self.tiles.insert(coord, roads);
    }
}

impl TileSource for MemoryTileSource {
    fn load_roads(
        &self,
        coord: TileCoord,
    ) -> impl Future<Output = std::result::Result<Option<TileRoads>, BoxError>> {
        let roads = self.tiles.get(&coord).cloned();
        async move { Ok(roads) }
    }
}
