//! basegraph-graphics CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use basegraph_graphics_cli::Args;

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Starting basegraph-graphics");

    if let Err(err) = basegraph_graphics_cli::run(&args) {
        let mut report = String::new();
        if miette::GraphicalReportHandler::new()
            .render_report(&mut report, &err)
            .is_err()
        {
            report = err.to_string();
        }

        error!("{report}");
        process::exit(1);
    }

    info!(output = args.output; "Done");
}
