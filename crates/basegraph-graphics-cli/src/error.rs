//! Error type for the CLI.
//!
//! [`CliError`] implements [`miette::Diagnostic`] so that `main` can render
//! it with miette's graphical handler, including a source snippet for
//! malformed edge-list lines.

use std::io;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use basegraph_graphics::GraphicsError;

use crate::config::ConfigError;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(code(basegraph_graphics::config))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(basegraph_graphics::render))]
    Graphics(#[from] GraphicsError),

    #[error("Invalid edge list: {message}")]
    #[diagnostic(
        code(basegraph_graphics::input),
        help("each line holds two 0-based vertex indices, e.g. `0 1`; `#` starts a comment")
    )]
    Input {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl CliError {
    /// Create a new `Input` error pointing at `span` in `source`.
    pub fn new_input_error(
        message: impl Into<String>,
        name: &str,
        source: &str,
        span: impl Into<SourceSpan>,
    ) -> Self {
        Self::Input {
            message: message.into(),
            src: NamedSource::new(name, source.to_string()),
            span: span.into(),
        }
    }
}
