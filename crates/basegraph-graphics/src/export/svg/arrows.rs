use svg::node::element::{Definitions, Marker, Path};

use crate::{config::StyleConfig, geometry::Coordinates};

/// Id of the single arrowhead marker shared by all directed edges.
pub const ARROWHEAD_ID: &str = "arrowhead";

/// Creates the marker definition used by directed edges
pub fn create_marker_definitions(style: &StyleConfig) -> Definitions {
    let marker_style = style.marker();

    let arrowhead = Marker::new()
        .set("id", ARROWHEAD_ID)
        .set("viewBox", marker_style.view_box())
        .set("refX", marker_style.ref_x())
        .set("refY", marker_style.ref_y())
        .set("markerWidth", marker_style.width())
        .set("markerHeight", marker_style.height())
        .set("orient", marker_style.orient())
        .add(
            Path::new()
                .set("d", marker_style.path())
                .set("fill", style.marker_fill()),
        );

    Definitions::new().add(arrowhead)
}

/// Marker reference for the end of a directed edge
pub fn marker_end_reference() -> String {
    format!("url(#{ARROWHEAD_ID})")
}

/// Moves `target` toward `source` by `clearance`, leaving room for an arrowhead.
///
/// The direction comes from `atan2`, which is defined for vertical edges.
/// Coincident points are returned unchanged, and a clearance longer than the
/// edge stops at `source`.
pub fn shorten_edge(source: Coordinates, target: Coordinates, clearance: f64) -> Coordinates {
    let delta = target - source;
    if delta.is_zero() {
        return target;
    }
    let distance = delta.norm();

    let angle = delta.y().atan2(delta.x());
    let shift = clearance.min(distance);
    target - Coordinates::new(angle.cos(), angle.sin()) * shift
}

/// Create a path data string from two points
pub fn create_path_data_from_points(start: Coordinates, end: Coordinates) -> String {
    format!("M {},{} L {},{}", start.x(), start.y(), end.x(), end.y())
}

/// Create a straight edge path with the configured edge style
pub fn create_path(
    start: Coordinates,
    end: Coordinates,
    style: &StyleConfig,
    directed: bool,
) -> Path {
    let edge_style = style.edge();

    let path = Path::new()
        .set("class", "edge")
        .set("d", create_path_data_from_points(start, end))
        .set("fill", "none")
        .set("stroke", edge_style.stroke())
        .set("stroke-width", edge_style.stroke_width())
        .set("stroke-opacity", edge_style.opacity());

    if directed {
        path.set("marker-end", marker_end_reference())
    } else {
        path
    }
}
