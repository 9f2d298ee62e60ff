//! Edge-list input files.
//!
//! One edge per line as two whitespace-separated, 0-based vertex indices.
//! Blank lines are skipped and `#` starts a comment that runs to the end of
//! the line.

use petgraph::graph::{DiGraph, UnGraph};

use crate::error::CliError;

/// Parsed edge list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EdgeList {
    vertex_count: usize,
    edges: Vec<(u32, u32)>,
}

impl EdgeList {
    /// Parse an edge list; `name` is only used in error reports.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Input`] pointing at the first malformed line.
    pub fn parse(name: &str, source: &str) -> Result<Self, CliError> {
        let mut edges = Vec::new();
        let mut offset = 0;

        for line in source.split_inclusive('\n') {
            let content = line.split('#').next().unwrap_or_default();
            let trimmed = content.trim();

            if !trimmed.is_empty() {
                let leading = content.len() - content.trim_start().len();
                let span = (offset + leading, trimmed.len());

                let fields: Vec<&str> = trimmed.split_whitespace().collect();
                let [source_field, target_field] = fields[..] else {
                    return Err(CliError::new_input_error(
                        format!("expected 2 vertex indices, found {}", fields.len()),
                        name,
                        source,
                        span,
                    ));
                };

                let parse_index = |field: &str| {
                    field.parse::<u32>().map_err(|err| {
                        CliError::new_input_error(
                            format!("`{field}` is not a vertex index: {err}"),
                            name,
                            source,
                            span,
                        )
                    })
                };
                edges.push((parse_index(source_field)?, parse_index(target_field)?));
            }

            offset += line.len();
        }

        let vertex_count = edges
            .iter()
            .map(|&(a, b)| a.max(b) as usize + 1)
            .max()
            .unwrap_or(0);

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Number of vertices implied by the largest index.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Raise the vertex count to include isolated trailing vertices.
    ///
    /// Never lowers it below the largest index in use.
    pub fn set_min_vertex_count(&mut self, vertex_count: usize) -> &mut Self {
        self.vertex_count = self.vertex_count.max(vertex_count);
        self
    }

    pub fn to_undirected(&self) -> UnGraph<(), ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count, self.edges.len());
        for _ in 0..self.vertex_count {
            graph.add_node(());
        }
        graph.extend_with_edges(self.edges.iter().copied());
        graph
    }

    pub fn to_directed(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count, self.edges.len());
        for _ in 0..self.vertex_count {
            graph.add_node(());
        }
        graph.extend_with_edges(self.edges.iter().copied());
        graph
    }
}
