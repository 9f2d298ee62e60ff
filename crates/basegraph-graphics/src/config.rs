//! Configuration types for graph layout and rendering.
//!
//! This module provides configuration structures that control how graphs are
//! laid out and styled. All types implement [`serde::Deserialize`] so they can
//! be loaded from TOML, and every field falls back to a default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`LayoutEngine`] and its parameters.
//! - [`StyleConfig`] - Vertex, edge and arrowhead appearance.
//!
//! # Example
//!
//! ```
//! # use basegraph_graphics::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().validate().is_ok());
//! assert_eq!(config.layout().iterations(), 100);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{color::Color, error::GraphicsError};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the layout configuration for modification.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Available layout algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Fruchterman-Reingold force-directed placement.
    #[default]
    Force,
    /// Vertices evenly spaced on a circle.
    Circle,
}

impl FromStr for LayoutEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(Self::Force),
            "circle" => Ok(Self::Circle),
            _ => Err(format!("unknown layout engine `{s}` (expected `force` or `circle`)")),
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Force => write!(f, "force"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// Layout engine selection and parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    engine: LayoutEngine,
    iterations: usize,
    /// Ideal edge length; derived from the canvas area when absent.
    k: Option<f64>,
    width: f64,
    height: f64,
    /// Circle layout radius.
    radius: f64,
    /// Seed for the initial placement; callers pick an OS-seeded RNG when absent.
    seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            iterations: 100,
            k: None,
            width: 10.0,
            height: 10.0,
            radius: 10.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Returns the selected [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the number of force simulation rounds.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the configured ideal distance, if any.
    pub fn k(&self) -> Option<f64> {
        self.k
    }

    /// Returns the canvas width used by the force simulation.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height used by the force simulation.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the circle layout radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the random seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Set the layout engine
    pub fn set_engine(&mut self, engine: LayoutEngine) -> &mut Self {
        self.engine = engine;
        self
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Checks the numeric parameters the layout engines divide by.
    ///
    /// A missing or non-positive `k` still means "derive from the canvas".
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Layout`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), GraphicsError> {
        check_positive("layout.width", self.width)?;
        check_positive("layout.height", self.height)?;

        if !self.radius.is_finite() {
            return Err(GraphicsError::new_layout_error(
                "layout.radius",
                format!("{} is not finite", self.radius),
            ));
        }

        if let Some(k) = self.k.filter(|k| !k.is_finite()) {
            return Err(GraphicsError::new_layout_error(
                "layout.k",
                format!("{k} is not finite"),
            ));
        }

        Ok(())
    }
}

fn check_positive(property: &str, value: f64) -> Result<(), GraphicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GraphicsError::new_layout_error(
            property,
            format!("{value} is not a finite positive number"),
        ))
    }
}

/// Visual styling of rendered graphs.
///
/// Replaces free-form property maps with typed sections. Colors are checked
/// while deserializing; numeric ranges are checked by [`StyleConfig::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    vertex: VertexStyle,

    #[serde(default)]
    edge: EdgeStyle,

    #[serde(default)]
    marker: MarkerStyle,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from its three sections.
    pub fn new(vertex: VertexStyle, edge: EdgeStyle, marker: MarkerStyle) -> Self {
        Self {
            vertex,
            edge,
            marker,
        }
    }

    /// Returns the vertex style.
    pub fn vertex(&self) -> &VertexStyle {
        &self.vertex
    }

    /// Returns the edge style.
    pub fn edge(&self) -> &EdgeStyle {
        &self.edge
    }

    /// Returns the arrowhead marker style.
    pub fn marker(&self) -> &MarkerStyle {
        &self.marker
    }

    /// Padding needed so vertex circles and edge strokes stay inside the viewport.
    pub fn padding(&self) -> f64 {
        self.vertex.radius + 0.5 * self.edge.stroke_width
    }

    /// Distance by which a directed edge stops short of its target center.
    ///
    /// Markers are scaled by the edge stroke width (`markerUnits="strokeWidth"`),
    /// so the marker extent in user units is `marker.width * edge.stroke_width`.
    pub fn arrow_clearance(&self) -> f64 {
        self.padding() + 1.5 * self.marker.width * self.edge.stroke_width
    }

    /// Paint used to fill the arrowhead.
    pub fn marker_fill(&self) -> &Color {
        self.marker.fill.as_ref().unwrap_or(&self.edge.stroke)
    }

    /// Checks numeric ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::Style`] naming the first offending property.
    pub fn validate(&self) -> Result<(), GraphicsError> {
        check_non_negative("vertex.radius", self.vertex.radius)?;
        check_non_negative("vertex.stroke_width", self.vertex.stroke_width)?;
        check_non_negative("edge.stroke_width", self.edge.stroke_width)?;
        check_non_negative("marker.width", self.marker.width)?;
        check_non_negative("marker.height", self.marker.height)?;

        if !(0.0..=1.0).contains(&self.edge.opacity) {
            return Err(GraphicsError::new_style_error(
                "edge.opacity",
                format!("{} is outside [0, 1]", self.edge.opacity),
            ));
        }

        let view_box: Vec<&str> = self.marker.view_box.split_whitespace().collect();
        if view_box.len() != 4 || view_box.iter().any(|value| value.parse::<f64>().is_err()) {
            return Err(GraphicsError::new_style_error(
                "marker.view_box",
                format!("`{}` is not four numbers", self.marker.view_box),
            ));
        }

        if self.marker.path.trim().is_empty() {
            return Err(GraphicsError::new_style_error("marker.path", "empty path"));
        }

        Ok(())
    }
}

fn check_non_negative(property: &str, value: f64) -> Result<(), GraphicsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GraphicsError::new_style_error(
            property,
            format!("{value} is not a finite non-negative number"),
        ))
    }
}

/// Appearance of vertex circles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VertexStyle {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    radius: f64,
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self {
            fill: Color::new("#e7e7e7").expect("'#e7e7e7' is a valid CSS color"),
            stroke: Color::new("#333333").expect("'#333333' is a valid CSS color"),
            stroke_width: 0.05,
            radius: 0.2,
        }
    }
}

impl VertexStyle {
    /// Creates a new vertex style.
    pub fn new(fill: Color, stroke: Color, stroke_width: f64, radius: f64) -> Self {
        Self {
            fill,
            stroke,
            stroke_width,
            radius,
        }
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Appearance of edge lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    stroke: Color,
    stroke_width: f64,
    opacity: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: Color::new("#333333").expect("'#333333' is a valid CSS color"),
            stroke_width: 0.08,
            opacity: 0.8,
        }
    }
}

impl EdgeStyle {
    /// Creates a new edge style.
    pub fn new(stroke: Color, stroke_width: f64, opacity: f64) -> Self {
        Self {
            stroke,
            stroke_width,
            opacity,
        }
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

/// Arrowhead marker attached to directed edges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    view_box: String,
    ref_x: f64,
    ref_y: f64,
    width: f64,
    height: f64,
    orient: String,
    /// Path data drawn inside the marker's view box.
    path: String,
    /// Defaults to the edge stroke color.
    fill: Option<Color>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            view_box: "0 0 10 10".to_string(),
            ref_x: 1.0,
            ref_y: 5.0,
            width: 2.0,
            height: 2.0,
            orient: "auto".to_string(),
            path: "M 0 0 L 10 5 L 0 10 z".to_string(),
            fill: None,
        }
    }
}

impl MarkerStyle {
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    pub fn ref_x(&self) -> f64 {
        self.ref_x
    }

    pub fn ref_y(&self) -> f64 {
        self.ref_y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn orient(&self) -> &str {
        &self.orient
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        let style = StyleConfig::default();
        assert!(style.validate().is_ok());
        assert_eq!(style.marker_fill().to_string(), "#333333");
    }

    #[test]
    fn test_padding_and_clearance() {
        let style = StyleConfig::new(
            VertexStyle::new(Color::none(), Color::none(), 0.0, 3.0),
            EdgeStyle::new(Color::new("black").unwrap(), 1.0, 1.0),
            MarkerStyle::default(),
        );

        assert_approx_eq!(f64, style.padding(), 3.5);
        assert_approx_eq!(f64, style.arrow_clearance(), 6.5);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let style = StyleConfig::new(
            VertexStyle::new(Color::none(), Color::none(), 0.0, -1.0),
            EdgeStyle::default(),
            MarkerStyle::default(),
        );

        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("vertex.radius"));
    }

    #[test]
    fn test_bad_view_box_rejected() {
        let mut style = StyleConfig::default();
        style.marker.view_box = "0 0 10".to_string();

        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("marker.view_box"));
    }

    #[test]
    fn test_opacity_range() {
        let style = StyleConfig::new(
            VertexStyle::default(),
            EdgeStyle::new(Color::new("red").unwrap(), 1.0, 1.5),
            MarkerStyle::default(),
        );

        assert!(style.validate().is_err());
    }

    #[test]
    fn test_default_layout_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_canvas_rejected() {
        let mut layout = LayoutConfig::default();
        layout.width = 0.0;
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, GraphicsError::Layout(_)));
        assert!(err.to_string().contains("layout.width"));

        layout.width = 10.0;
        layout.height = -4.0;
        assert!(layout.validate().unwrap_err().to_string().contains("layout.height"));

        layout.width = f64::INFINITY;
        layout.height = 10.0;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_layout_k_must_be_finite() {
        let mut layout = LayoutConfig::default();

        layout.k = Some(-1.0);
        assert!(layout.validate().is_ok());

        layout.k = Some(f64::NAN);
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("layout.k"));
    }

    #[test]
    fn test_deserialized_zero_height_rejected() {
        let config: AppConfig = toml::from_str("[layout]\nheight = 0.0\n").unwrap();
        assert!(matches!(
            config.layout().validate(),
            Err(GraphicsError::Layout(_))
        ));
    }

    #[test]
    fn test_layout_engine_from_str() {
        assert_eq!(LayoutEngine::from_str("force").unwrap(), LayoutEngine::Force);
        assert_eq!(LayoutEngine::from_str("circle").unwrap(), LayoutEngine::Circle);
        assert!(LayoutEngine::from_str("spring").is_err());
        assert_eq!(LayoutEngine::Circle.to_string(), "circle");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            engine = "circle"
            iterations = 10

            [style.vertex]
            radius = 1.5

            [style.marker]
            fill = "red"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().engine(), LayoutEngine::Circle);
        assert_eq!(config.layout().iterations(), 10);
        assert_approx_eq!(f64, config.layout().width(), 10.0);
        assert_approx_eq!(f64, config.style().vertex().radius(), 1.5);
        assert_eq!(config.style().vertex().fill().to_string(), "#e7e7e7");
        assert_eq!(config.style().marker_fill().to_string(), "red");
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [style.edge]
            stroke = "not-a-color"
            "#,
        );

        assert!(result.is_err());
    }
}
