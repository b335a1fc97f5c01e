#![forbid(unsafe_code)]

//! Headless road-scene builder for spacetime maps.
//!
//! Consumes decoded vector-tile road layers and a displacement field from
//! `spacetime-core`, and produces styled screen-space paths and markers for
//! an external renderer to draw. Nothing here fetches, caches, or paints.

pub mod model;
pub mod project;
pub mod scene;
pub mod style;
pub mod tile;

use crate::project::{Projector, WebMercatorProjector};
use crate::tile::{BoxError, TileCoord};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tile {coord} failed to load: {source}")]
    TileSource {
        coord: TileCoord,
        #[source]
        source: BoxError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Knobs for one scene build. The projector is the external map renderer's
/// geographic-to-screen function; the rest are the user-facing toggles.
#[derive(Clone)]
pub struct RenderOptions {
    pub projector: Arc<dyn Projector + Send + Sync>,
    /// Warp geometry through the displacement field, or draw it as-is.
    /// Style lookup is unaffected either way.
    pub warp: bool,
    /// Also emit one fixed-radius marker per control point.
    pub show_markers: bool,
    /// Upper bound on in-flight tile loads.
    pub concurrency: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            projector: Arc::new(WebMercatorProjector::default()),
            warp: true,
            show_markers: true,
            concurrency: 4,
        }
    }
}
