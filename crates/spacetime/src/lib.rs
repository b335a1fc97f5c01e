#![forbid(unsafe_code)]

//! `spacetime` is a headless engine for "spacetime maps": road networks
//! deformed so that travel time, rather than physical distance, sets the
//! geometry. Intersection points are relaxed by a spring simulation driven
//! by per-edge travel-speed data, and the resulting displacement field warps
//! vector-tile road geometry for an external renderer.
//!
//! # Features
//!
//! - `render`: enable the scene-building layer (`spacetime::render`) that
//!   turns tiles plus a displacement field into styled screen-space paths

pub use spacetime_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use spacetime_render::RenderOptions;
    pub use spacetime_render::model::{Marker, RoadScene, ScenePoint, Stroke, WarpedPath};
    pub use spacetime_render::project::{Projector, WebMercatorProjector};
    pub use spacetime_render::scene::{build_scene, draw_scene};
    pub use spacetime_render::style::{MARKER_COLOR, MARKER_RADIUS, RoadClass};
    pub use spacetime_render::tile::{
        BoxError, GeometryType, MemoryTileSource, RoadFeature, TileCoord, TilePoint, TileRoads,
        TileSource,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] spacetime_core::Error),
        #[error(transparent)]
        Render(#[from] spacetime_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// End-to-end helper: relax the point graph, then build a road scene
    /// from the resulting displacement field.
    pub async fn simulate_and_build_scene<S: TileSource>(
        points: Vec<spacetime_core::geom::GeoPoint>,
        edges: Vec<spacetime_core::SpringEdge>,
        params: spacetime_core::SpringParams,
        source: &S,
        tiles: &[TileCoord],
        options: &RenderOptions,
    ) -> Result<RoadScene> {
        let field = spacetime_core::simulate(points, edges, params)?;
        Ok(spacetime_render::scene::build_scene(source, tiles, &field, options).await?)
    }
}
