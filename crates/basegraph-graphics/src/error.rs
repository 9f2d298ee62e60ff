//! Error types for layout and rendering operations.
//!
//! This module provides the main error type [`GraphicsError`]. Degenerate
//! geometry (coincident vertices, zero displacement, vertical edges) is not an
//! error: the layout engines and the exporter handle it inline.

use std::io;

use thiserror::Error;

/// The main error type for basegraph-graphics operations.
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(
        "graph has {vertices} vertices while there are {positions} vertex positions"
    )]
    Validation { vertices: usize, positions: usize },

    #[error("cannot compute tight bounds: no vertex positions")]
    EmptyLayout,

    #[error("Style error: {0}")]
    Style(String),

    #[error("Layout error: {0}")]
    Layout(String),
}

impl GraphicsError {
    /// Create a new `Style` error for an offending style property.
    pub fn new_style_error(property: &str, reason: impl std::fmt::Display) -> Self {
        Self::Style(format!("invalid `{property}`: {reason}"))
    }

    /// Create a new `Layout` error for an offending layout parameter.
    pub fn new_layout_error(property: &str, reason: impl std::fmt::Display) -> Self {
        Self::Layout(format!("invalid `{property}`: {reason}"))
    }
}
