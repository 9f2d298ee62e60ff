pub mod svg;

use crate::{error::GraphicsError, geometry::Coordinates, graph::Graph};

/// Writes a positioned graph to some output.
pub trait Exporter {
    /// Export `graph` drawn at `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Validation`] when `positions` does not hold one
    /// entry per vertex, and [`GraphicsError::Io`] when the output cannot be
    /// written.
    fn export_graph<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
    ) -> Result<(), GraphicsError>;
}

/// Guard shared by every exporter: one position per vertex.
pub(crate) fn validate_positions<G: Graph>(
    graph: &G,
    positions: &[Coordinates],
) -> Result<(), GraphicsError> {
    if graph.size() == positions.len() {
        Ok(())
    } else {
        Err(GraphicsError::Validation {
            vertices: graph.size(),
            positions: positions.len(),
        })
    }
}
