//! Dataset-to-scene pipeline tests: parse the wire formats, run the spring
//! relaxation, and build a drawable scene.

use futures::executor::block_on;
use spacetime_core::geom::geo;
use spacetime_core::{DisplacementField, SpringParams, parse_points, parse_weights, simulate};
use spacetime_render::scene::build_scene;
use spacetime_render::style::RoadClass;
use spacetime_render::tile::{GeometryType, MemoryTileSource, RoadFeature, TileCoord, TilePoint, TileRoads};
use spacetime_render::RenderOptions;

const POINTS_JSON: &str = r#"[
  [0.0, 0.0],
  [0.0, 1.0],
  [1.0, 1.0],
  [1.0, 0.0]
]"#;

const WEIGHTS_JSON: &str = r#"[
  {
    "source": 0,
    "target": 1,
    "distance_miles": 69.0,
    "time_seconds": 3600.0,
    "avg_speed_mph": 69.0,
    "spring_force": 1.0
  }
]"#;

fn road_tile() -> (MemoryTileSource, Vec<TileCoord>) {
    // z12 tile just north-east of null island, where the test points live.
    let coord = TileCoord::new(12, 2048, 2047);
    let mut source = MemoryTileSource::new();
    source.insert(
        coord,
        TileRoads {
            extent: 4096,
            features: vec![RoadFeature {
                kind: "secondary".to_string(),
                geometry_type: GeometryType::Line,
                points: vec![
                    TilePoint { x: 0, y: 4096 },
                    TilePoint { x: 2048, y: 2048 },
                    TilePoint { x: 4096, y: 0 },
                ],
            }],
        },
    );
    (source, vec![coord])
}

fn simulated_field() -> DisplacementField {
    let points = parse_points(POINTS_JSON).unwrap();
    let edges = parse_weights(WEIGHTS_JSON)
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();
    let params = SpringParams {
        steps: 1,
        reference_latitude: 0.0,
        ..SpringParams::default()
    };
    simulate(points, edges, params).unwrap()
}

#[test]
fn simulation_moves_only_connected_nodes() {
    let field = simulated_field();
    assert_eq!(field.len(), 4);

    let moved0 = field.displaced()[0] - field.original()[0];
    let moved1 = field.displaced()[1] - field.original()[1];
    // Connected pair attracts symmetrically.
    assert!(moved0.length() > 0.0);
    assert!((moved0.x + moved1.x).abs() < 1e-12);
    assert!((moved0.y + moved1.y).abs() < 1e-12);
    // Unconnected nodes stay put.
    assert_eq!(field.displaced()[2], field.original()[2]);
    assert_eq!(field.displaced()[3], field.original()[3]);
}

#[test]
fn scene_build_warps_roads_through_the_simulated_field() {
    let field = simulated_field();
    let (source, tiles) = road_tile();
    let options = RenderOptions {
        show_markers: true,
        ..RenderOptions::default()
    };

    let scene = block_on(build_scene(&source, &tiles, &field, &options)).unwrap();
    assert_eq!(scene.paths.len(), 1);
    assert_eq!(scene.paths[0].class, RoadClass::Secondary);
    assert_eq!(scene.paths[0].points.len(), 3);
    assert_eq!(scene.markers.len(), 4);

    // Disabling the warp must reproduce the direct projection, regardless of
    // what the field contains.
    let unwarped_options = RenderOptions {
        warp: false,
        ..options.clone()
    };
    let unwarped = block_on(build_scene(&source, &tiles, &field, &unwarped_options)).unwrap();
    let no_field = block_on(build_scene(
        &source,
        &tiles,
        &DisplacementField::from_pairs([]),
        &unwarped_options,
    ))
    .unwrap();
    assert_eq!(unwarped.paths, no_field.paths);
    assert_ne!(scene.paths, unwarped.paths);
}

#[test]
fn empty_tile_list_yields_markers_only() {
    let field = DisplacementField::from_pairs([(geo(0.5, 0.5), geo(0.6, 0.6))]);
    let source = MemoryTileSource::new();
    let scene = block_on(build_scene(&source, &[], &field, &RenderOptions::default())).unwrap();
    assert!(scene.paths.is_empty());
    assert_eq!(scene.markers.len(), 1);
}
