//! Integration tests for the GraphicsBuilder API
//!
//! These tests exercise layout and rendering together through the public API.

use std::fs;

use basegraph_graphics::{
    Coordinates, Graph, GraphicsBuilder, GraphicsError,
    config::{AppConfig, LayoutEngine},
    export::svg::shorten_edge,
};
use float_cmp::assert_approx_eq;
use petgraph::graph::{DiGraph, UnGraph};
use rand::{SeedableRng, rngs::StdRng};
use tempfile::tempdir;

/// Extracts `(min_x, min_y, width, height)` from the root element
fn view_box(svg: &str) -> (f64, f64, f64, f64) {
    let start = svg.find("viewBox=\"").expect("document has a viewBox") + "viewBox=\"".len();
    let end = start + svg[start..].find('"').unwrap();
    let values: Vec<f64> = svg[start..end]
        .split_whitespace()
        .map(|value| value.parse().unwrap())
        .collect();
    (values[0], values[1], values[2], values[3])
}

/// Each line with its space-separated tokens sorted
///
/// Attribute order is not part of the output contract.
fn normalized(svg: &str) -> Vec<String> {
    svg.lines()
        .map(|line| {
            let mut tokens: Vec<&str> = line.split(' ').collect();
            tokens.sort_unstable();
            tokens.join(" ")
        })
        .collect()
}

/// Extracts the end point of every edge path
///
/// Edge path data is `M x,y L x,y`; the marker path has no commas.
fn edge_end_points(svg: &str) -> Vec<Coordinates> {
    svg.match_indices("d=\"M ")
        .map(|(index, _)| {
            let rest = &svg[index + 3..];
            &rest[..rest.find('"').unwrap()]
        })
        .filter(|data| data.contains(','))
        .map(|data| {
            let end = data.split(" L ").nth(1).unwrap();
            let (x, y) = end.split_once(',').unwrap();
            Coordinates::new(x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

#[test]
fn test_builder_api_exists() {
    let _builder = GraphicsBuilder::default();
}

#[test]
fn test_triangle_scenario() {
    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
    let positions = vec![
        Coordinates::new(0.0, 0.0),
        Coordinates::new(1.0, 0.0),
        Coordinates::new(0.0, 1.0),
    ];

    let builder = GraphicsBuilder::default();
    let svg = builder.render_svg(&graph, &positions).expect("Failed to render");
    let shift = builder.config().style().padding();

    assert_eq!(svg.matches("class=\"edge\"").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 3);

    let (min_x, min_y, width, height) = view_box(&svg);
    assert_approx_eq!(f64, min_x, -shift);
    assert_approx_eq!(f64, min_y, -shift);
    assert_approx_eq!(f64, width, 1.0 + 2.0 * shift);
    assert_approx_eq!(f64, height, 1.0 + 2.0 * shift);
}

#[test]
fn test_directed_end_points_are_shortened() {
    let graph = DiGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0), (0, 2)]);
    let positions = vec![
        Coordinates::new(0.0, 0.0),
        Coordinates::new(4.0, 0.0),
        Coordinates::new(4.0, 3.0),
    ];

    let builder = GraphicsBuilder::default();
    let svg = builder.render_svg(&graph, &positions).unwrap();
    let clearance = builder.config().style().arrow_clearance();

    let mut expected: Vec<Coordinates> = Graph::edges(&graph)
        .map(|(i, j)| shorten_edge(positions[i], positions[j], clearance))
        .collect();
    let mut actual = edge_end_points(&svg);
    assert_eq!(actual.len(), 4);

    let by_x_then_y = |a: &Coordinates, b: &Coordinates| {
        a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y()))
    };
    expected.sort_by(by_x_then_y);
    actual.sort_by(by_x_then_y);

    for (actual, expected) in actual.iter().zip(&expected) {
        assert_approx_eq!(f64, actual.x(), expected.x(), epsilon = 1e-9);
        assert_approx_eq!(f64, actual.y(), expected.y(), epsilon = 1e-9);
    }

    // The vertical edge (1 -> 2) ends below its target by exactly the clearance
    let vertical = shorten_edge(positions[1], positions[2], clearance);
    assert_approx_eq!(f64, vertical.x(), 4.0, epsilon = 1e-12);
    assert_approx_eq!(f64, vertical.y(), 3.0 - clearance, epsilon = 1e-12);
}

#[test]
fn test_rendering_is_deterministic() {
    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
    let builder = GraphicsBuilder::default();
    let first = builder.layout(&graph, &mut StdRng::seed_from_u64(21)).unwrap();
    let second = builder.layout(&graph, &mut StdRng::seed_from_u64(21)).unwrap();
    assert_eq!(first, second);

    let first = builder.render_svg(&graph, &first).unwrap();
    let second = builder.render_svg(&graph, &second).unwrap();
    assert_eq!(normalized(&first), normalized(&second));
}

#[test]
fn test_layout_then_vertices_inside_view_box() {
    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (5, 0)]);
    let builder = GraphicsBuilder::default();
    let positions = builder.layout(&graph, &mut StdRng::seed_from_u64(2024)).unwrap();
    let svg = builder.render_svg(&graph, &positions).unwrap();

    let shift = builder.config().style().padding();
    let (min_x, min_y, width, height) = view_box(&svg);
    for position in &positions {
        assert!(position.x() >= min_x + shift - 1e-9);
        assert!(position.x() <= min_x + width - shift + 1e-9);
        assert!(position.y() >= min_y + shift - 1e-9);
        assert!(position.y() <= min_y + height - shift + 1e-9);
    }
}

#[test]
fn test_circle_layout_from_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        engine = "circle"
        radius = 2.0
        "#,
    )
    .unwrap();
    assert_eq!(config.layout().engine(), LayoutEngine::Circle);

    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
    let positions = GraphicsBuilder::new(config)
        .layout(&graph, &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(positions.len(), 4);
    assert_approx_eq!(f64, positions[0].y(), -2.0, epsilon = 1e-12);
}

#[test]
fn test_write_svg_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("graph.svg");

    let graph = DiGraph::<(), ()>::from_edges([(0, 1)]);
    let positions = [Coordinates::new(0.0, 0.0), Coordinates::new(3.0, 4.0)];

    let builder = GraphicsBuilder::default();
    builder.write_svg(&graph, &positions, &output).expect("Failed to write");

    let written = fs::read_to_string(&output).unwrap();
    let rendered = builder.render_svg(&graph, &positions).unwrap();
    assert_eq!(normalized(&written), normalized(&rendered));
    assert!(written.starts_with("<?xml"));
    assert!(written.contains("<!-- Created with basegraph-graphics"));
    assert!(written.contains("<marker"));
}

#[test]
fn test_degenerate_canvas_is_rejected() {
    let config: AppConfig = toml::from_str("[layout]\nwidth = 0.0\n").unwrap();
    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);

    let result = GraphicsBuilder::new(config).layout(&graph, &mut StdRng::seed_from_u64(1));

    assert!(matches!(result, Err(GraphicsError::Layout(_))));
}

#[test]
fn test_configured_force_layout_is_finite() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        width = 0.5
        height = 40.0
        k = -3.0
        "#,
    )
    .unwrap();
    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
    let builder = GraphicsBuilder::new(config);

    let positions = builder.layout(&graph, &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(positions.iter().all(|position| position.is_finite()));

    let svg = builder.render_svg(&graph, &positions).unwrap();
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_write_mismatch_creates_no_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("graph.svg");

    let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
    let result = GraphicsBuilder::default().write_svg(&graph, &[Coordinates::default()], &output);

    assert!(matches!(result, Err(GraphicsError::Validation { .. })));
    assert!(!output.exists());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing").join("graph.svg");

    let graph = UnGraph::<(), ()>::from_edges([(0, 1)]);
    let positions = [Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)];
    let result = GraphicsBuilder::default().write_svg(&graph, &positions, &output);

    assert!(matches!(result, Err(GraphicsError::Io(_))));
}
