//! Screen projection boundary.
//!
//! The interactive map renderer owns the real projection; scenes only need a
//! function from geographic degrees to viewport pixels. The deterministic
//! [`WebMercatorProjector`] covers tests and offline rendering against a
//! fixed viewport.

use spacetime_core::geom::{GeoPoint, ScreenPoint, geo, screen};
use std::f64::consts::PI;

pub trait Projector {
    fn project(&self, point: GeoPoint) -> ScreenPoint;
}

/// Web-Mercator projection for a fixed viewport: a center, a fractional zoom
/// level, and a viewport size in pixels. World size is `tile_size * 2^zoom`
/// px, matching the slippy-map convention of interactive renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercatorProjector {
    pub center: GeoPoint,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    pub tile_size: f64,
}

impl Default for WebMercatorProjector {
    fn default() -> Self {
        // The original deployment's viewport: Tucson city center at z12.
        Self {
            center: geo(-110.926389, 32.221667),
            zoom: 12.0,
            width: 1024.0,
            height: 768.0,
            tile_size: 512.0,
        }
    }
}

impl WebMercatorProjector {
    fn world(&self, p: GeoPoint) -> (f64, f64) {
        let scale = self.tile_size * self.zoom.exp2();
        let x = (p.x + 180.0) / 360.0 * scale;
        let y = (1.0 - p.y.to_radians().tan().asinh() / PI) / 2.0 * scale;
        (x, y)
    }
}

impl Projector for WebMercatorProjector {
    fn project(&self, point: GeoPoint) -> ScreenPoint {
        let (wx, wy) = self.world(point);
        let (cx, cy) = self.world(self.center);
        screen(wx - cx + self.width / 2.0, wy - cy + self.height / 2.0)
    }
}
