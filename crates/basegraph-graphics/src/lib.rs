//! basegraph-graphics - vertex layouts and SVG drawings for graphs.
//!
//! Two independent stages are provided:
//!
//! - **Layout**: [`layout::force::Engine`] (Fruchterman-Reingold) and
//!   [`layout::circle::Engine`] assign one [`Coordinates`] per vertex.
//! - **Export**: [`export::svg::Renderer`] draws a graph at given positions as an
//!   SVG document, with arrowheads for directed graphs.
//!
//! Any type implementing [`Graph`] can be laid out and drawn; `petgraph`
//! graphs work out of the box. [`GraphicsBuilder`] wires both stages to an
//! [`AppConfig`].

pub mod color;
pub mod config;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod layout;

mod error;

pub use error::GraphicsError;
pub use geometry::{Bounds, Coordinates};
pub use graph::Graph;

use std::path::Path;

use log::{debug, info};
use rand::Rng;

use config::AppConfig;
use export::{
    Exporter,
    svg::{Renderer, SvgBuilder},
};

/// Builder for laying out and rendering graphs.
///
/// # Examples
///
/// ```rust,no_run
/// use basegraph_graphics::{GraphicsBuilder, config::AppConfig};
/// use petgraph::graph::UnGraph;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
///
/// let builder = GraphicsBuilder::new(AppConfig::default());
/// let positions = builder.layout(&graph, &mut StdRng::seed_from_u64(7))
///     .expect("default layout is valid");
///
/// let svg = builder.render_svg(&graph, &positions)
///     .expect("Failed to render");
///
/// builder.write_svg(&graph, &positions, "triangle.svg")
///     .expect("Failed to write");
/// ```
#[derive(Default)]
pub struct GraphicsBuilder {
    config: AppConfig,
}

impl GraphicsBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute vertex positions with the configured layout engine.
    ///
    /// The random source is only used by the force engine, for the initial
    /// placement.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Layout`] for a degenerate layout configuration.
    pub fn layout<G: Graph, R: Rng>(
        &self,
        graph: &G,
        rng: &mut R,
    ) -> Result<Vec<Coordinates>, GraphicsError> {
        let positions = layout::calculate(self.config.layout(), graph, rng)?;
        debug!(vertex_count = positions.len(); "Layout calculated");
        Ok(positions)
    }

    /// Render a positioned graph to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `GraphicsError` for an invalid style or when `positions` does
    /// not hold one entry per vertex.
    pub fn render_svg<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
    ) -> Result<String, GraphicsError> {
        info!(vertex_count = graph.size(), directed = graph.is_directed(); "Rendering SVG");

        Renderer::new(self.config.style().clone())?.render(graph, positions)
    }

    /// Render a positioned graph to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns `GraphicsError` for an invalid style, a length mismatch
    /// (checked before the file is created) or an I/O failure.
    pub fn write_svg<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
        file_name: impl AsRef<Path>,
    ) -> Result<(), GraphicsError> {
        let svg = SvgBuilder::new(file_name)
            .with_style(self.config.style())
            .build()?;

        svg.export_graph(graph, positions)?;

        info!("SVG exported successfully");
        Ok(())
    }
}
