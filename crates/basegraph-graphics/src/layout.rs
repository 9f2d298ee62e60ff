//! Vertex layout engines
//!
//! A layout assigns one [`Coordinates`] to every vertex; index `i` of the
//! returned vector is the position of vertex `i`. Engines never fail: an empty
//! graph yields an empty vector. [`calculate`] checks the configuration before
//! an engine runs.
//!
//! - [`force::Engine`]: Fruchterman-Reingold force-directed placement.
//! - [`circle::Engine`]: vertices evenly spaced on a circle.

pub mod circle;
pub mod force;

use log::info;
use rand::Rng;

use crate::{
    config::{LayoutConfig, LayoutEngine},
    error::GraphicsError,
    geometry::Coordinates,
    graph::Graph,
};

/// Trait defining the interface for layout engines
pub trait LayoutAlgorithm {
    /// Calculate one position per vertex of `graph`
    ///
    /// Randomized engines draw from `rng` only; seed it for reproducible
    /// layouts.
    fn calculate<G: Graph, R: Rng>(&self, graph: &G, rng: &mut R) -> Vec<Coordinates>;
}

/// Run the engine selected by `config`.
///
/// # Errors
///
/// Returns [`GraphicsError::Layout`] when `config` holds a degenerate canvas,
/// radius or ideal distance.
pub fn calculate<G: Graph, R: Rng>(
    config: &LayoutConfig,
    graph: &G,
    rng: &mut R,
) -> Result<Vec<Coordinates>, GraphicsError> {
    config.validate()?;
    info!(engine:% = config.engine(), vertex_count = graph.size(); "Calculating layout");

    let positions = match config.engine() {
        LayoutEngine::Force => force::Engine::from_config(config).calculate(graph, rng),
        LayoutEngine::Circle => circle::Engine::new(config.radius()).calculate(graph, rng),
    };
    Ok(positions)
}
