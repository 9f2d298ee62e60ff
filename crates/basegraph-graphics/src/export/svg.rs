//! SVG export of positioned graphs.
//!
//! The document has a fixed shape:
//!
//! 1. XML declaration and attribution comment.
//! 2. `<svg>` root whose `viewBox` is the tight bounding box of the vertex
//!    positions, padded by the vertex radius plus half the edge stroke width.
//! 3. For directed graphs, a `<defs>` block holding the arrowhead marker.
//! 4. One `<path>` per edge, then one `<circle>` per vertex.
//!
//! An empty graph produces the declaration, the comment and an empty root.
//!
//! [`Renderer`] produces the text; [`Svg`] writes it to a file.

mod arrows;
mod renderer;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::{
    config::StyleConfig, error::GraphicsError, export::Exporter, geometry::Coordinates,
    graph::Graph,
};

pub use arrows::shorten_edge;
pub use renderer::{Renderer, tight_bounds};

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```rust,no_run
/// use basegraph_graphics::{config::StyleConfig, export::{Exporter, svg::SvgBuilder}};
/// use petgraph::graph::UnGraph;
///
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1)]);
/// let positions = [(0.0, 0.0).into(), (1.0, 0.0).into()];
///
/// let exporter = SvgBuilder::new("out.svg")
///     .with_style(&StyleConfig::default())
///     .build()
///     .expect("default style is valid");
/// exporter.export_graph(&graph, &positions).expect("Failed to export");
/// ```
pub struct SvgBuilder {
    file_name: PathBuf,
    style: StyleConfig,
}

impl SvgBuilder {
    /// Create a builder writing to `file_name` with the default style.
    pub fn new(file_name: impl AsRef<Path>) -> Self {
        Self {
            file_name: file_name.as_ref().to_path_buf(),
            style: StyleConfig::default(),
        }
    }

    /// Use the given style instead of the default one
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validate the style and create the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Style`] for out-of-range style values.
    pub fn build(self) -> Result<Svg, GraphicsError> {
        Ok(Svg {
            file_name: self.file_name,
            renderer: Renderer::new(self.style)?,
        })
    }
}

/// SVG file exporter
#[derive(Debug)]
pub struct Svg {
    file_name: PathBuf,
    renderer: Renderer,
}

impl Svg {
    /// Writes a rendered document to the destination file
    ///
    /// A failure midway leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Io`] if the file cannot be created or written.
    pub fn write_document(&self, content: &str) -> Result<(), GraphicsError> {
        let file_name = self.file_name.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(GraphicsError::Io(err));
            }
        };

        if let Err(err) = f.write_all(content.as_bytes()) {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(GraphicsError::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_graph<G: Graph>(
        &self,
        graph: &G,
        positions: &[Coordinates],
    ) -> Result<(), GraphicsError> {
        let content = self.renderer.render(graph, positions)?;
        self.write_document(&content)
    }
}
