//! Spring-mass relaxation of the point graph.
//!
//! Every edge applies a force proportional to the *current* separation of its
//! endpoints (not to a rest-length offset): positive coefficients pull the
//! endpoints together, negative ones push them apart, and the effect grows
//! with distance. Combined with the per-step velocity damping this settles
//! within a handful of ticks, which is why the step budget is a small fixed
//! number rather than a convergence criterion.

use crate::dataset::SpringEdge;
use crate::error::{Error, Result};
use crate::frame::LocalFrame;
use crate::geom::{GeoPoint, PlanarPoint, PlanarVector};
use crate::warp::DisplacementField;
use tracing::trace;

/// Floor applied to edge lengths so coincident endpoints never divide by zero.
pub const DIST_EPSILON: f64 = 1e-6;

/// Tuning for a simulation run. The defaults reproduce the original Tucson
/// deployment: two ticks of `dt = 0.05` at damping `0.6`, coefficients
/// clamped to `±1.5`, frame flattened about the city center latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Number of ticks a [`SpringSystem::run`] performs. Zero is valid and
    /// returns the input positions unchanged.
    pub steps: u32,
    /// Integration time delta per tick. Must be positive.
    pub dt: f64,
    /// Velocity retention factor in `[0, 1]`, multiplied into the whole
    /// velocity every tick (it decays pre-existing velocity too).
    pub damping: f64,
    /// Symmetric clamp applied to every edge coefficient on construction.
    pub force_clamp: f64,
    /// Latitude the planar frame is flattened about, in degrees.
    pub reference_latitude: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            steps: 2,
            dt: 0.05,
            damping: 0.6,
            force_clamp: 1.5,
            reference_latitude: 32.221667,
        }
    }
}

/// Mutable state of one simulation run: planar positions and velocities for
/// every node, plus the (validated, clamped) edge list.
///
/// The system owns its state exclusively while running; a caller-owned loop
/// drives [`step`](Self::step) one tick at a time (or [`run`](Self::run)
/// performs the whole configured budget), and [`into_field`](Self::into_field)
/// publishes the immutable displacement field at the end.
#[derive(Debug)]
pub struct SpringSystem {
    frame: LocalFrame,
    original: Vec<GeoPoint>,
    positions: Vec<PlanarPoint>,
    velocities: Vec<PlanarVector>,
    forces: Vec<PlanarVector>,
    edges: Vec<SpringEdge>,
    params: SpringParams,
}

impl SpringSystem {
    /// Validates the edge list against the point list and sets up the planar
    /// state. Fails with [`Error::InvalidGraph`] before any step executes if
    /// an edge references an out-of-range node.
    pub fn new(
        points: Vec<GeoPoint>,
        edges: Vec<SpringEdge>,
        params: SpringParams,
    ) -> Result<Self> {
        let node_count = points.len();
        for (idx, edge) in edges.iter().enumerate() {
            for node in [edge.source, edge.target] {
                if node >= node_count {
                    return Err(Error::InvalidGraph {
                        edge: idx,
                        node,
                        node_count,
                    });
                }
            }
        }

        let clamp = params.force_clamp.abs();
        let edges: Vec<SpringEdge> = edges
            .into_iter()
            .map(|e| SpringEdge {
                force: e.force.clamp(-clamp, clamp),
                ..e
            })
            .collect();

        let frame = LocalFrame::new(params.reference_latitude);
        let positions: Vec<PlanarPoint> = points.iter().map(|&p| frame.to_planar(p)).collect();

        Ok(Self {
            frame,
            positions,
            velocities: vec![PlanarVector::zero(); node_count],
            forces: vec![PlanarVector::zero(); node_count],
            original: points,
            edges,
            params,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advances the system by one tick: accumulate edge forces, fold them
    /// into the damped velocities, then move the positions. The order
    /// (force, then damped velocity, then position) is part of the contract.
    pub fn step(&mut self) {
        let dt = self.params.dt;
        let damping = self.params.damping;

        for f in &mut self.forces {
            *f = PlanarVector::zero();
        }

        for edge in &self.edges {
            let d = self.positions[edge.target] - self.positions[edge.source];
            let dist = d.length().max(DIST_EPSILON);
            let force = (d / dist) * (edge.force * dist);
            // Equal and opposite: a self-loop cancels to zero net force.
            self.forces[edge.source] += force;
            self.forces[edge.target] -= force;
        }

        for i in 0..self.positions.len() {
            let v = (self.velocities[i] + self.forces[i] * dt) * damping;
            self.velocities[i] = v;
            self.positions[i] += v * dt;
        }

        trace!(nodes = self.positions.len(), edges = self.edges.len(), "spring step");
    }

    /// Runs the configured step budget and publishes the displacement field.
    pub fn run(mut self) -> DisplacementField {
        for _ in 0..self.params.steps {
            self.step();
        }
        self.into_field()
    }

    /// Publishes the current node positions, converted back to geographic
    /// coordinates, as an immutable displacement field.
    pub fn into_field(self) -> DisplacementField {
        let frame = self.frame;
        let displaced = self
            .positions
            .iter()
            .map(|&p| frame.to_geographic(p))
            .collect();
        DisplacementField::new(self.original, displaced)
    }
}

/// One-shot convenience: build the system, run the configured steps, return
/// the field.
pub fn simulate(
    points: Vec<GeoPoint>,
    edges: Vec<SpringEdge>,
    params: SpringParams,
) -> Result<DisplacementField> {
    Ok(SpringSystem::new(points, edges, params)?.run())
}
