//! Moving-Least-Squares warping of the sparse displacement field.
//!
//! For a query point the warp fits a locally weighted affine transform to the
//! (original, displaced) control pairs, with weights falling off as the
//! inverse square of the distance to each original control point. Nearby
//! control points therefore dominate, and the warp follows the field exactly
//! at the control points while staying smooth everywhere else.

use crate::geom::{GeoPoint, geo};

/// Floor added to squared distances so a query sitting exactly on a control
/// point keeps a finite (but dominant) weight.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Threshold under which the weighted spread `mu` counts as degenerate (a
/// single distinct control point); the warp then falls back to the weighted
/// displaced centroid.
const MU_FLOOR: f64 = 1e-12;

/// The (original, displaced) geographic position pairs for all simulated
/// nodes. Produced once per simulation run and read-only afterwards; both
/// sequences share the node order of the input point dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementField {
    original: Vec<GeoPoint>,
    displaced: Vec<GeoPoint>,
}

impl DisplacementField {
    /// Pairs up original and displaced positions; both vectors must have the
    /// same node order. A length mismatch is truncated to the shorter side.
    pub fn new(original: Vec<GeoPoint>, displaced: Vec<GeoPoint>) -> Self {
        debug_assert_eq!(original.len(), displaced.len());
        let n = original.len().min(displaced.len());
        let mut original = original;
        let mut displaced = displaced;
        original.truncate(n);
        displaced.truncate(n);
        Self {
            original,
            displaced,
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (GeoPoint, GeoPoint)>) -> Self {
        let (original, displaced) = pairs.into_iter().unzip();
        Self {
            original,
            displaced,
        }
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn original(&self) -> &[GeoPoint] {
        &self.original
    }

    pub fn displaced(&self) -> &[GeoPoint] {
        &self.displaced
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.original
            .iter()
            .copied()
            .zip(self.displaced.iter().copied())
    }

    /// Warps a single query point through the field.
    ///
    /// O(n) in the control point count, no acceleration structure. An empty
    /// field is the identity warp.
    pub fn warp(&self, query: GeoPoint) -> GeoPoint {
        let n = self.original.len();
        if n == 0 {
            return query;
        }

        let mut weights = Vec::with_capacity(n);
        let mut w_sum = 0.0;
        let mut p_centroid = (0.0, 0.0);
        let mut q_centroid = (0.0, 0.0);
        for (p, q) in self.iter() {
            let d = query - p;
            let w = 1.0 / (d.square_length() + WEIGHT_EPSILON);
            weights.push(w);
            w_sum += w;
            p_centroid.0 += w * p.x;
            p_centroid.1 += w * p.y;
            q_centroid.0 += w * q.x;
            q_centroid.1 += w * q.y;
        }
        let p_centroid = geo(p_centroid.0 / w_sum, p_centroid.1 / w_sum);
        let q_centroid = geo(q_centroid.0 / w_sum, q_centroid.1 / w_sum);

        // Weighted spread of the original set (mu) and cross-covariance of
        // the centered sets (m), accumulated as four scalars.
        let mut mu = 0.0;
        let (mut m00, mut m01, mut m10, mut m11) = (0.0, 0.0, 0.0, 0.0);
        for (i, (p, q)) in self.iter().enumerate() {
            let w = weights[i];
            let pc = p - p_centroid;
            let qc = q - q_centroid;
            mu += w * pc.square_length();
            m00 += w * pc.x * qc.x;
            m01 += w * pc.x * qc.y;
            m10 += w * pc.y * qc.x;
            m11 += w * pc.y * qc.y;
        }

        if mu < MU_FLOOR {
            // All control points coincide with their centroid; the affine fit
            // is underdetermined and the displaced centroid is the limit.
            return q_centroid;
        }

        let px = query - p_centroid;
        geo(
            q_centroid.x + (m00 * px.x + m10 * px.y) / mu,
            q_centroid.y + (m01 * px.x + m11 * px.y) / mu,
        )
    }
}
