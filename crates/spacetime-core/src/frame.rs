//! Conversion between geographic coordinates and the flat frame the spring
//! system integrates in.

use crate::geom::{GeoPoint, PlanarPoint, geo, planar};

/// A local equirectangular frame about a reference latitude: longitudes are
/// scaled by `cos(reference latitude)`, latitudes pass through unchanged.
///
/// This keeps east-west and north-south distances comparable near the
/// reference latitude, which is all the simulation needs. It is a city-scale
/// approximation, not a general projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    reference_latitude: f64,
    cos_ref_lat: f64,
}

impl LocalFrame {
    pub fn new(reference_latitude: f64) -> Self {
        Self {
            reference_latitude,
            cos_ref_lat: reference_latitude.to_radians().cos(),
        }
    }

    pub fn reference_latitude(&self) -> f64 {
        self.reference_latitude
    }

    pub fn to_planar(&self, p: GeoPoint) -> PlanarPoint {
        planar(p.x * self.cos_ref_lat, p.y)
    }

    pub fn to_geographic(&self, p: PlanarPoint) -> GeoPoint {
        geo(p.x / self.cos_ref_lat, p.y)
    }
}
