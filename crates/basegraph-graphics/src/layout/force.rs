//! Force-directed layout engine
//!
//! Implements the placement algorithm of T. M. J. Fruchterman and
//! E. M. Reingold. Every pair of vertices repels, every edge attracts, and a
//! linearly cooling temperature caps how far a vertex may move per round.

use log::{debug, trace};
use rand::Rng;

use crate::{config::LayoutConfig, geometry::Coordinates, graph::Graph, layout::LayoutAlgorithm};

/// Distances are floored to this value so coincident vertices do not blow up.
const MIN_DISTANCE: f64 = 0.01;

/// Force layout engine
///
/// Vertices start in the top-left quarter of a `width x height` canvas and are
/// moved by the simulation for a fixed number of rounds. There is no
/// convergence check.
#[derive(Debug, Clone)]
pub struct Engine {
    iterations: usize,
    // Ideal distance between vertices; derived from the area when unset
    k: Option<f64>,
    width: f64,
    height: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new force layout engine
    pub fn new() -> Self {
        Self {
            iterations: 100,
            k: None,
            width: 10.0,
            height: 10.0,
        }
    }

    /// Create an engine from the layout section of the configuration
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut engine = Self::new();
        engine
            .set_iterations(config.iterations())
            .set_k(config.k())
            .set_canvas(config.width(), config.height());
        engine
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the ideal distance between vertices
    ///
    /// `None` or a non-positive value derives it as `sqrt(width * height / n)`.
    pub fn set_k(&mut self, k: Option<f64>) -> &mut Self {
        self.k = k;
        self
    }

    /// Set the canvas size
    ///
    /// Both sides must be positive; [`LayoutConfig::validate`] checks this for
    /// configured layouts.
    pub fn set_canvas(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Ideal distance used for a graph with `vertex_count` vertices.
    pub fn ideal_distance(&self, vertex_count: usize) -> f64 {
        match self.k {
            Some(k) if k > 0.0 => k,
            _ => (self.width * self.height / vertex_count as f64).sqrt(),
        }
    }

    /// Uniform placement in `[0, width/4] x [0, height/4]`
    fn initialize_positions<R: Rng>(&self, vertex_count: usize, rng: &mut R) -> Vec<Coordinates> {
        (0..vertex_count)
            .map(|_| {
                let x = rng.random::<f64>() * 0.25 * self.width;
                let y = rng.random::<f64>() * 0.25 * self.height;
                Coordinates::new(x, y)
            })
            .collect()
    }

    /// Run the force simulation
    fn run_force_simulation<G: Graph>(
        &self,
        graph: &G,
        mut positions: Vec<Coordinates>,
    ) -> Vec<Coordinates> {
        let vertex_count = positions.len();
        let k = self.ideal_distance(vertex_count);
        let repel = |distance: f64| k * k / distance;
        let attract = |distance: f64| -distance * distance / k;

        let mut temperature = 0.1 * (self.width * self.height).sqrt();
        let cooling_factor = temperature / (self.iterations + 1) as f64;

        debug!(
            vertex_count,
            k,
            temperature,
            cooling_factor,
            iterations = self.iterations;
            "Starting force simulation"
        );

        let edges: Vec<(usize, usize)> = graph.edges().collect();
        let mut displacements = vec![Coordinates::default(); vertex_count];

        for iteration in 0..self.iterations {
            displacements.fill(Coordinates::default());

            for i in 0..vertex_count {
                for j in i + 1..vertex_count {
                    apply_force(&positions, &mut displacements, i, j, repel);
                }
            }

            for &(i, j) in &edges {
                apply_force(&positions, &mut displacements, i, j, attract);
            }

            for (position, displacement) in positions.iter_mut().zip(&displacements) {
                // Isolated or perfectly balanced vertex: no direction to move in
                let norm = displacement.norm();
                if norm > 0.0 {
                    *position += *displacement / norm * temperature;
                }
            }

            temperature -= cooling_factor;
            trace!(iteration, temperature; "Force simulation round done");
        }

        positions
    }
}

/// Accumulate `force(distance)` along `positions[i] - positions[j]`.
///
/// Positive forces push the vertices apart, negative forces pull them
/// together. Self-loops contribute nothing.
fn apply_force(
    positions: &[Coordinates],
    displacements: &mut [Coordinates],
    i: usize,
    j: usize,
    force: impl Fn(f64) -> f64,
) {
    let delta = positions[i] - positions[j];
    let distance = delta.norm().max(MIN_DISTANCE);
    let displacement = delta / distance * force(distance);

    displacements[i] += displacement;
    displacements[j] -= displacement;
}

impl LayoutAlgorithm for Engine {
    fn calculate<G: Graph, R: Rng>(&self, graph: &G, rng: &mut R) -> Vec<Coordinates> {
        let vertex_count = graph.size();
        if vertex_count == 0 {
            return Vec::new();
        }

        let positions = self.initialize_positions(vertex_count, rng);
        self.run_force_simulation(graph, positions)
    }
}
