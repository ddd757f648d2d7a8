//! SVG rendering.
//!
//! Nodes are laid out on a grid by [`Layout`], one row per walk depth, and
//! each row is spread evenly across the widest row's width. Edges are straight
//! paths with an arrowhead marker and a label along the path.

use super::layout::Layout;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphEdge, GraphNode, Identity};
use log::debug;
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

/// Options for SVG rendering.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Attribute to use as the node label instead of the id
    pub node_label: Option<String>,
    /// Width of one grid cell
    pub grid_width: f64,
    /// Height of one grid row
    pub grid_height: f64,
    /// Gap left between an edge end and the node centre
    pub link_padding: f64,
    /// Element id scoping the embedded stylesheet; generated when unset
    pub element_id: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            node_label: None,
            grid_width: 100.0,
            grid_height: 100.0,
            link_padding: 20.0,
            element_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

/// Render a graph as a standalone SVG document.
pub fn render_svg<N: GraphNode, E: GraphEdge>(graph: &Graph<N, E>, options: &SvgOptions) -> String {
    let element_id = options
        .element_id
        .clone()
        .unwrap_or_else(|| format!("gstd-{}", Uuid::new_v4().simple()));
    let label_key = options.node_label.as_deref();

    let labels: Vec<String> = graph
        .nodes()
        .iter()
        .map(|node| node.label(label_key))
        .collect();
    // Circles only fit short labels; judge by the first few nodes
    let short_labels = labels.iter().take(5).all(|label| label.chars().count() < 3);

    let layout = Layout::compute(graph);
    let total_width = layout.widest_row() as f64 * options.grid_width;
    let total_height = layout.row_count() as f64 * options.grid_height;
    debug!(
        "Rendering SVG: {} rows, {}x{}",
        layout.row_count(),
        total_width,
        total_height
    );

    let mut positions: HashMap<Identity, Point> = HashMap::new();
    for node in graph.nodes() {
        let id = node.id();
        if let Some(placement) = layout.placement(&id) {
            let cell_width = total_width / layout.row_len(placement.row).max(1) as f64;
            positions.entry(id).or_insert(Point {
                x: placement.column as f64 * cell_width + cell_width / 2.0,
                y: placement.row as f64 * options.grid_height + options.grid_height / 2.0,
            });
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" id="{element_id}" viewBox="0 0 {total_width} {total_height}" width="{total_width}" height="{total_height}">"#
    ));
    out.push('\n');
    out.push_str(&stylesheet(&element_id));
    out.push_str(&format!(
        r#"<defs><marker id="{element_id}-arrowhead" viewBox="-0 -5 10 10" refX="8" refY="0" orient="auto" markerWidth="10" markerHeight="10"><path d="M 0,-5 L 10,0 L 0,5" fill="currentColor" style="stroke: none"/></marker></defs>"#
    ));
    out.push('\n');

    for (position, edge) in graph.edges().iter().enumerate() {
        let (Some(&source), Some(&target)) =
            (positions.get(&edge.source()), positions.get(&edge.target()))
        else {
            continue;
        };
        let (start, end) = edge_endpoints(source, target, options.link_padding, short_labels);
        out.push_str(&format!(
            r#"<path class="edgepath" id="{element_id}-edgepath{position}" marker-end="url(#{element_id}-arrowhead)" d="M {} {} L {} {}"/>"#,
            start.x, start.y, end.x, end.y
        ));
        out.push('\n');
        out.push_str(&format!(
            r##"<text class="edgelabel"><textPath href="#{element_id}-edgepath{position}" startOffset="50%">{}</textPath></text>"##,
            escape_xml(&edge.label())
        ));
        out.push('\n');
    }

    for (node, label) in graph.nodes().iter().zip(&labels) {
        let Some(point) = positions.get(&node.id()) else {
            continue;
        };
        out.push_str(&format!(
            r#"<g class="node" transform="translate({}, {})">"#,
            point.x, point.y
        ));
        if short_labels {
            out.push_str(r#"<circle r="20"/>"#);
        }
        out.push_str(&format!("<text>{}</text></g>\n", escape_xml(label)));
    }

    out.push_str("</svg>\n");
    out
}

/// Render a graph and write the SVG document to `path`.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write_svg<N: GraphNode, E: GraphEdge>(
    graph: &Graph<N, E>,
    path: impl AsRef<Path>,
    options: &SvgOptions,
) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing SVG to {}", path.display());
    std::fs::write(path, render_svg(graph, options))
        .map_err(|e| GraphError::io(format!("Failed to write {}", path.display()), Some(e)))
}

/// Shorten a link so it stops short of both node centres.
///
/// With long labels there are no circles to aim at, so the ends are pushed
/// vertically off the text instead.
fn edge_endpoints(source: Point, target: Point, padding: f64, short_labels: bool) -> (Point, Point) {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let length = (dx * dx + dy * dy).sqrt();
    let ratio = if length > 0.0 { padding / length } else { 0.0 };

    let mut start = Point {
        x: source.x + ratio * dx,
        y: source.y + ratio * dy,
    };
    let mut end = Point {
        x: target.x - ratio * dx,
        y: target.y - ratio * dy,
    };
    if !short_labels {
        start.y = source.y + padding * 0.75;
        end.y = target.y - padding * 0.75;
    }
    (start, end)
}

fn stylesheet(element_id: &str) -> String {
    format!(
        r#"<style>
#{element_id} .edgepath {{ stroke: currentColor; fill: none; }}
#{element_id} .edgelabel {{ pointer-events: none; font-size: 10px; fill: currentColor; }}
#{element_id} textPath {{ text-anchor: middle; pointer-events: none; font-family: system-ui,sans-serif; }}
#{element_id} .node circle {{ stroke: currentColor; fill: transparent; }}
#{element_id} .node text {{ fill: currentColor; text-anchor: middle; font-family: system-ui,sans-serif; dominant-baseline: central; }}
</style>
"#
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
