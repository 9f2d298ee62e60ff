use log::debug;
use svg::{Document, node::element::Circle};

use crate::{
    config::StyleConfig,
    error::GraphicsError,
    export::{self, svg::arrows},
    geometry::{Bounds, Coordinates},
    graph::Graph,
};

const PROLOGUE: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
    "<!-- Created with basegraph-graphics (https://github.com/base-graph/basegraph-graphics) -->\n",
    "\n",
);

/// Draws positioned graphs as SVG text with a validated style.
///
/// Has no destination; [`super::Svg`] pairs a renderer with an output file.
#[derive(Debug, Clone)]
pub struct Renderer {
    style: StyleConfig,
}

impl Renderer {
    /// Create a renderer for `style`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Style`] for out-of-range style values.
    pub fn new(style: StyleConfig) -> Result<Self, GraphicsError> {
        style.validate()?;
        Ok(Self { style })
    }

    /// Render the complete document, prologue included.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Validation`] if `positions` does not hold one
    /// entry per vertex.
    pub fn render<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
    ) -> Result<String, GraphicsError> {
        let doc = self.render_graph(graph, positions)?;
        Ok(format!("{PROLOGUE}{doc}"))
    }

    /// Build the `<svg>` element tree for a positioned graph
    pub fn render_graph<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
    ) -> Result<Document, GraphicsError> {
        export::validate_positions(graph, positions)?;

        if graph.size() == 0 {
            debug!("Empty graph, writing document envelope only");
            return Ok(Document::new());
        }

        let bounds = tight_bounds(positions, self.style.padding())?;
        debug!(
            min_x = bounds.min_x(),
            min_y = bounds.min_y(),
            width = bounds.width(),
            height = bounds.height();
            "Computed tight view box"
        );

        let directed = graph.is_directed();
        let mut doc = Document::new().set("viewBox", bounds.to_view_box());

        if directed {
            doc = doc.add(arrows::create_marker_definitions(&self.style));
        }

        let clearance = self.style.arrow_clearance();
        let mut edge_count = 0usize;
        for (i, j) in graph.edges() {
            let (source, target) = (positions[i], positions[j]);
            let path = if directed {
                let end = arrows::shorten_edge(source, target, clearance);
                arrows::create_path(source, end, &self.style, true)
            } else if i != j {
                arrows::create_path(source, target, &self.style, false)
            } else {
                continue;
            };

            doc = doc.add(path);
            edge_count += 1;
        }

        for vertex in graph.vertices() {
            doc = doc.add(self.render_vertex(positions[vertex]));
        }

        debug!(edge_count, vertex_count = graph.size(), directed; "SVG document rendered");
        Ok(doc)
    }

    fn render_vertex(&self, position: Coordinates) -> Circle {
        let vertex_style = self.style.vertex();

        Circle::new()
            .set("class", "vertex")
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", vertex_style.radius())
            .set("fill", vertex_style.fill())
            .set("stroke", vertex_style.stroke())
            .set("stroke-width", vertex_style.stroke_width())
    }
}

/// Tight bounding box of `positions`, grown by `padding` on every side.
///
/// # Errors
///
/// Returns [`GraphicsError::EmptyLayout`] when there is no position.
pub fn tight_bounds(positions: &[Coordinates], padding: f64) -> Result<Bounds, GraphicsError> {
    Bounds::enclosing(positions.iter().copied())
        .map(|bounds| bounds.inflate(padding))
        .ok_or(GraphicsError::EmptyLayout)
}
