//! The scene builder: tiles plus a displacement field in, a styled road
//! scene out.
//!
//! Tile loading is the only asynchronous stage and runs with bounded
//! parallelism; drawing is a single synchronous pass once every layer is
//! decoded, so a scene never mixes frames. The builder holds no cache and no
//! state: identical inputs produce identical scenes, and it is re-invoked
//! from scratch whenever the view, the field, or the warp toggle changes.

use crate::model::{Marker, RoadScene, ScenePoint, WarpedPath};
use crate::project::Projector;
use crate::style::{MARKER_COLOR, MARKER_RADIUS, RoadClass};
use crate::tile::{GeometryType, TileCoord, TileRoads, TileSource};
use crate::{Error, RenderOptions, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use spacetime_core::DisplacementField;
use spacetime_core::geom::GeoPoint;
use tracing::debug;

/// Loads every requested tile through `source` with bounded parallelism,
/// then draws the scene in one synchronous pass. The first tile failure
/// aborts the build.
pub async fn build_scene<S: TileSource>(
    source: &S,
    tiles: &[TileCoord],
    field: &DisplacementField,
    options: &RenderOptions,
) -> Result<RoadScene> {
    let loaded: Vec<(TileCoord, Option<TileRoads>)> = stream::iter(tiles.iter().copied())
        .map(|coord| async move {
            match source.load_roads(coord).await {
                Ok(roads) => Ok((coord, roads)),
                Err(source) => Err(Error::TileSource { coord, source }),
            }
        })
        .buffered(options.concurrency.max(1))
        .try_collect()
        .await?;

    debug!(
        requested = tiles.len(),
        with_roads = loaded.iter().filter(|(_, r)| r.is_some()).count(),
        "tiles loaded"
    );
    Ok(draw_scene(&loaded, field, options))
}

/// Synchronous draw pass over already-decoded tiles, in input order.
///
/// Skipped without error: tiles without a road layer, non-line geometry,
/// unknown classifications, classes outside the drawn set, and degenerate
/// polylines with fewer than two vertices.
pub fn draw_scene(
    tiles: &[(TileCoord, Option<TileRoads>)],
    field: &DisplacementField,
    options: &RenderOptions,
) -> RoadScene {
    let projector = options.projector.as_ref();

    let mut paths = Vec::new();
    for (coord, roads) in tiles {
        let Some(roads) = roads else { continue };
        let extent = roads.extent as f64;
        for feature in &roads.features {
            if feature.geometry_type != GeometryType::Line {
                continue;
            }
            let Some(class) = RoadClass::from_kind(&feature.kind) else {
                continue;
            };
            if !class.is_rendered() {
                continue;
            }
            if feature.points.len() < 2 {
                continue;
            }

            let points = feature
                .points
                .iter()
                .map(|tp| {
                    let geographic =
                        coord.tile_to_geographic(tp.x as f64, tp.y as f64, extent);
                    place(geographic, field, options.warp, projector)
                })
                .collect();
            paths.push(WarpedPath {
                class,
                stroke: class.stroke(),
                points,
            });
        }
    }

    let mut markers = Vec::new();
    if options.show_markers {
        for (original, _) in field.iter() {
            markers.push(Marker {
                center: place(original, field, options.warp, projector),
                radius: MARKER_RADIUS,
                color: MARKER_COLOR.to_string(),
            });
        }
    }

    debug!(paths = paths.len(), markers = markers.len(), "scene drawn");
    RoadScene { paths, markers }
}

fn place(
    point: GeoPoint,
    field: &DisplacementField,
    warp: bool,
    projector: &dyn Projector,
) -> ScenePoint {
    let position = if warp { field.warp(point) } else { point };
    let px = projector.project(position);
    ScenePoint { x: px.x, y: px.y }
}
