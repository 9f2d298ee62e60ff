//! Circle layout engine
//!
//! Places vertex `i` of `n` at angle `(i / n - 1/4) * 2π`, so vertex 0 sits at
//! the top of the circle (SVG y axis points down) and the others follow in
//! index order.

use std::f64::consts::TAU;

use rand::Rng;

use crate::{geometry::Coordinates, graph::Graph, layout::LayoutAlgorithm};

/// Circle layout engine
#[derive(Debug, Clone)]
pub struct Engine {
    radius: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Engine {
    /// Create a new circle layout engine with the given radius
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Positions for `vertex_count` vertices, independent of any edge.
    pub fn positions(&self, vertex_count: usize) -> Vec<Coordinates> {
        (0..vertex_count)
            .map(|vertex| {
                let angle = (vertex as f64 / vertex_count as f64 - 0.25) * TAU;
                Coordinates::new(self.radius * angle.cos(), self.radius * angle.sin())
            })
            .collect()
    }
}

impl LayoutAlgorithm for Engine {
    fn calculate<G: Graph, R: Rng>(&self, graph: &G, _rng: &mut R) -> Vec<Coordinates> {
        self.positions(graph.size())
    }
}
