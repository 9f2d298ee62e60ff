//! Color handling for graph drawings
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! with the `color` crate. The string is kept as written so that the SVG
//! output repeats exactly what was configured.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::Deserialize;

/// A validated SVG paint value: a CSS color or `none`.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    source: String,
    color: Option<DynamicColor>,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    /// The SVG keyword `none` is accepted as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use basegraph_graphics::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let transparent = Color::new("none").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        match DynamicColor::from_str(trimmed) {
            Ok(color) => Ok(Self {
                source: trimmed.to_string(),
                color: Some(color),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The `none` paint.
    pub fn none() -> Self {
        Self {
            source: "none".to_string(),
            color: None,
        }
    }

}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
