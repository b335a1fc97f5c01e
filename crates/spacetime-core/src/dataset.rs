//! Wire formats for the point/edge datasets produced by the offline data-prep
//! tooling, plus the spring-force derivation for callers that only have raw
//! travel speeds.
//!
//! The point file is a JSON array of `[lat, lon]` pairs; the weight file is a
//! JSON array of per-edge records keyed by node index, one file per travel
//! mode.

use crate::error::Result;
use crate::geom::{GeoPoint, geo};
use serde::{Deserialize, Serialize};

/// Costing model a weight dataset was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Auto,
    Bicycle,
}

impl TravelMode {
    /// The dataset suffix, as in `weights_auto.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Auto => "auto",
            TravelMode::Bicycle => "bicycle",
        }
    }
}

/// One record of the weight dataset: a directed relation between two point
/// indices with its routing measurements and the derived force coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    pub source: usize,
    pub target: usize,
    pub distance_miles: f64,
    pub time_seconds: f64,
    pub avg_speed_mph: f64,
    pub spring_force: f64,
}

/// A spring edge as consumed by the simulator: endpoint indices, the signed
/// force coefficient, and the average traversal speed (carried through for
/// rendering, unused by the simulation itself).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringEdge {
    pub source: usize,
    pub target: usize,
    pub force: f64,
    pub speed_mph: f64,
}

impl From<EdgeWeight> for SpringEdge {
    fn from(w: EdgeWeight) -> Self {
        Self {
            source: w.source,
            target: w.target,
            force: w.spring_force,
            speed_mph: w.avg_speed_mph,
        }
    }
}

/// Parses a point dataset (`points.json`): a JSON array of `[lat, lon]`
/// pairs, returned in file order as lon/lat points.
pub fn parse_points(json: &str) -> Result<Vec<GeoPoint>> {
    let raw: Vec<[f64; 2]> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(|[lat, lon]| geo(lon, lat)).collect())
}

/// Parses a weight dataset (`weights_{mode}.json`).
pub fn parse_weights(json: &str) -> Result<Vec<EdgeWeight>> {
    Ok(serde_json::from_str(json)?)
}

/// Derives force coefficients from per-edge average speeds.
///
/// Each speed is normalized by the mean speed of the whole edge set; an edge
/// with ratio `r` gets the coefficient `r - 1/r`, so faster-than-average
/// connections attract (positive) and slower ones repel (negative), with the
/// magnitude growing symmetrically in log-ratio terms.
///
/// Non-positive and non-finite speeds yield a zero coefficient (the offline
/// tooling filters such records before they reach a dataset).
pub fn spring_forces_from_speeds(speeds: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &s in speeds {
        if s.is_finite() && s > 0.0 {
            sum += s;
            count += 1;
        }
    }
    if count == 0 {
        return vec![0.0; speeds.len()];
    }
    let mean = sum / count as f64;

    speeds
        .iter()
        .map(|&s| {
            if !s.is_finite() || s <= 0.0 {
                return 0.0;
            }
            let r = s / mean;
            r - 1.0 / r
        })
        .collect()
}
