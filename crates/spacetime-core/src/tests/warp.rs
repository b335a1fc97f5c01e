use crate::geom::{GeoPoint, geo};
use crate::*;

fn close(a: GeoPoint, b: GeoPoint, tol: f64) -> bool {
    (a - b).length() <= tol
}

#[test]
fn empty_field_is_the_identity_warp() {
    let field = DisplacementField::from_pairs([]);
    let q = geo(-110.9, 32.2);
    assert_eq!(field.warp(q), q);
}

#[test]
fn single_control_point_returns_its_displaced_position() {
    let field = DisplacementField::from_pairs([(geo(10.0, 20.0), geo(11.0, 21.0))]);
    // Degenerate spread: any query collapses to the displaced position.
    assert!(close(field.warp(geo(0.0, 0.0)), geo(11.0, 21.0), 1e-9));
    assert!(close(field.warp(geo(10.0, 20.0)), geo(11.0, 21.0), 1e-9));
    assert!(close(field.warp(geo(-50.0, 3.0)), geo(11.0, 21.0), 1e-9));
}

#[test]
fn coincident_control_points_fall_back_to_the_displaced_centroid() {
    let field = DisplacementField::from_pairs([
        (geo(1.0, 1.0), geo(2.0, 3.0)),
        (geo(1.0, 1.0), geo(4.0, 5.0)),
    ]);
    // Both originals coincide, so the weights are equal and the fallback is
    // the plain average of the displaced positions.
    assert!(close(field.warp(geo(5.0, 5.0)), geo(3.0, 4.0), 1e-9));
}

#[test]
fn bisector_queries_map_to_the_displaced_midpoint() {
    // Two controls stretched apart along y at the second endpoint. For any
    // query equidistant from both originals the weights cancel and the
    // centered query offset is orthogonal to the covariance rows, so the
    // output is exactly the displaced centroid.
    let field = DisplacementField::from_pairs([
        (geo(0.0, 0.0), geo(0.0, 0.0)),
        (geo(2.0, 0.0), geo(2.0, 2.0)),
    ]);
    assert!(close(field.warp(geo(1.0, 0.0)), geo(1.0, 1.0), 1e-9));
    assert!(close(field.warp(geo(1.0, 5.0)), geo(1.0, 1.0), 1e-9));
}

#[test]
fn query_at_a_control_point_converges_to_its_displacement() {
    let field = DisplacementField::from_pairs([
        (geo(0.0, 0.0), geo(0.5, 0.5)),
        (geo(1.0, 1.0), geo(1.0, 1.0)),
        (geo(3.0, 4.0), geo(3.0, 3.0)),
    ]);
    // The weight singularity at zero distance dominates every other control
    // point; the epsilon floor bounds the residual error.
    assert!(close(field.warp(geo(1.0, 1.0)), geo(1.0, 1.0), 1e-3));
    assert!(close(field.warp(geo(3.0, 4.0)), geo(3.0, 3.0), 1e-3));
}

#[test]
fn warp_is_deterministic() {
    let field = DisplacementField::from_pairs([
        (geo(0.0, 0.0), geo(0.1, 0.0)),
        (geo(1.0, 0.0), geo(0.9, 0.1)),
        (geo(0.0, 1.0), geo(0.0, 1.1)),
    ]);
    let q = geo(0.4, 0.6);
    assert_eq!(field.warp(q), field.warp(q));
}

#[test]
fn field_accessors_preserve_node_order() {
    let pairs = [
        (geo(0.0, 0.0), geo(0.1, 0.0)),
        (geo(1.0, 0.0), geo(0.9, 0.1)),
    ];
    let field = DisplacementField::from_pairs(pairs);
    assert_eq!(field.len(), 2);
    assert!(!field.is_empty());
    let collected: Vec<_> = field.iter().collect();
    assert_eq!(collected, pairs);
}
