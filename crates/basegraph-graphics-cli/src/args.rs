//! Command-line argument definitions for the basegraph-graphics CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Layout flags override the matching configuration values.

use clap::Parser;

use basegraph_graphics::config::LayoutEngine;

/// Lay out an edge-list graph and draw it as SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input edge-list file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Treat edges as directed and draw arrowheads
    #[arg(short, long)]
    pub directed: bool,

    /// Minimum number of vertices, for isolated vertices past the last index
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Layout engine (force, circle)
    #[arg(short, long)]
    pub layout: Option<LayoutEngine>,

    /// Number of force simulation iterations
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Seed for the initial random placement; seeded from the OS when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
