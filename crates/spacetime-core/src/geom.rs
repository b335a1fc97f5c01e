#![forbid(unsafe_code)]

//! Geometry aliases over `euclid`, with one unit type per coordinate frame so
//! the compiler rejects cross-frame mixups (a geographic point cannot be fed
//! where a planar simulation point is expected).

/// Geographic coordinates: `x` is longitude, `y` is latitude, both in degrees.
pub struct Geographic;

/// The locally flattened simulation frame (see [`crate::frame::LocalFrame`]).
pub struct Planar;

/// Screen pixels, y growing downwards.
pub struct Screen;

pub type GeoPoint = euclid::Point2D<f64, Geographic>;
pub type GeoVector = euclid::Vector2D<f64, Geographic>;

pub type PlanarPoint = euclid::Point2D<f64, Planar>;
pub type PlanarVector = euclid::Vector2D<f64, Planar>;

pub type ScreenPoint = euclid::Point2D<f64, Screen>;

/// Builds a [`GeoPoint`] from a longitude/latitude pair in degrees.
pub fn geo(lon: f64, lat: f64) -> GeoPoint {
    euclid::point2(lon, lat)
}

pub fn planar(x: f64, y: f64) -> PlanarPoint {
    euclid::point2(x, y)
}

pub fn screen(x: f64, y: f64) -> ScreenPoint {
    euclid::point2(x, y)
}
