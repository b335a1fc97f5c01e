#![forbid(unsafe_code)]

//! Spacetime deformation core (headless).
//!
//! Takes a road network's intersection points and a travel-speed edge graph,
//! relaxes the points with a spring-mass simulation, and exposes the result
//! as a displacement field that warps arbitrary geometry via Moving Least
//! Squares.
//!
//! Design goals:
//! - deterministic, synchronous computation (callers own the step loop)
//! - no drawing, no I/O: collaborators supply data and consume geometry
//! - executor-free: nothing here assumes a particular runtime

pub mod dataset;
pub mod error;
pub mod frame;
pub mod geom;
pub mod sim;
pub mod warp;

pub use dataset::{EdgeWeight, SpringEdge, TravelMode, parse_points, parse_weights};
pub use error::{Error, Result};
pub use frame::LocalFrame;
pub use sim::{SpringParams, SpringSystem, simulate};
pub use warp::DisplacementField;

#[cfg(test)]
mod tests;
