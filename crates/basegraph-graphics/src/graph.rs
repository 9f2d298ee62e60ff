//! Read-only view of the host graph.
//!
//! Layout engines and the SVG exporter never own a graph; they only need the
//! vertex count, a canonical vertex order, the out-neighbors of each vertex
//! and whether edges carry a direction. [`Graph`] captures exactly that.
//!
//! Vertices are identified by their index in `0..size()`, which is also their
//! index in a coordinate array.
//!
//! `petgraph::Graph` implements the trait for both directed and undirected
//! edge types.

use std::ops::Range;

use petgraph::{
    EdgeType,
    graph::{IndexType, NodeIndex},
};

/// Adjacency queries needed to lay out and draw a graph.
pub trait Graph {
    /// Number of vertices.
    fn size(&self) -> usize;

    /// Whether edge `(i, j)` is one-way.
    ///
    /// For undirected graphs `(i, j)` implies `(j, i)`, and both directions
    /// appear in [`Graph::out_neighbors`].
    fn is_directed(&self) -> bool;

    /// Out-neighbors of `vertex`.
    ///
    /// # Panics
    /// May panic if `vertex >= self.size()`.
    fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize>;

    /// Vertex indices in canonical order.
    fn vertices(&self) -> Range<usize> {
        0..self.size()
    }

    /// Every edge exactly once, in canonical vertex order.
    ///
    /// Directed graphs yield each stored `(i, j)`. Undirected graphs yield
    /// only the `i <= j` orientation, so self-loops are kept.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
        let directed = self.is_directed();
        self.vertices().flat_map(move |i| {
            self.out_neighbors(i)
                .filter(move |&j| directed || i <= j)
                .map(move |j| (i, j))
        })
    }
}

impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn size(&self) -> usize {
        self.node_count()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> {
        self.neighbors(NodeIndex::new(vertex))
            .map(|neighbor| neighbor.index())
    }
}

impl<G: Graph> Graph for &G {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> {
        (**self).out_neighbors(vertex)
    }
}
