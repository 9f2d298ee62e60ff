//! CLI logic for the basegraph-graphics tool.
//!
//! Reads an edge list, lays the graph out and writes the drawing as SVG.

pub mod error;
pub mod input;

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::{fs, path::Path};

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use basegraph_graphics::{Graph, GraphicsBuilder, config::AppConfig};

use input::EdgeList;

/// Run the basegraph-graphics CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed edge lists
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        directed = args.directed;
        "Processing graph"
    );

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    let source = fs::read_to_string(&args.input)?;
    let mut edge_list = EdgeList::parse(&args.input, &source)?;
    if let Some(vertices) = args.vertices {
        edge_list.set_min_vertex_count(vertices);
    }
    debug!(
        vertex_count = edge_list.vertex_count(),
        edge_count = edge_list.edges().len();
        "Edge list parsed"
    );

    let builder = GraphicsBuilder::new(app_config);
    if args.directed {
        draw(&builder, &edge_list.to_directed(), &args.output)?;
    } else {
        draw(&builder, &edge_list.to_undirected(), &args.output)?;
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Command-line flags take precedence over the configuration file
fn apply_overrides(mut config: AppConfig, args: &Args) -> AppConfig {
    let layout = config.layout_mut();
    if let Some(engine) = args.layout {
        layout.set_engine(engine);
    }
    if let Some(iterations) = args.iterations {
        layout.set_iterations(iterations);
    }
    if args.seed.is_some() {
        layout.set_seed(args.seed);
    }
    config
}

fn draw<G: Graph>(
    builder: &GraphicsBuilder,
    graph: &G,
    output: impl AsRef<Path>,
) -> Result<(), CliError> {
    let mut rng = match builder.config().layout().seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let positions = builder.layout(graph, &mut rng)?;
    builder.write_svg(graph, &positions, output)?;
    Ok(())
}
