//! DOT format export for Graphviz visualization.
//!
//! Nodes that share a layout row are pinned to the same rank, so Graphviz
//! output lines up with the SVG renderer.

use super::layout::Layout;
use crate::graph::{Graph, GraphEdge, GraphNode};

/// Options for DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Attribute to use as the node label instead of the id
    pub node_label: Option<String>,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Attribute names appended to node labels
    pub show_properties: Vec<String>,
    /// Emit `rank=same` groups for layout rows
    pub rank_rows: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            node_label: None,
            rankdir: "TB".to_string(),
            show_properties: vec![],
            rank_rows: true,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn render_dot<N: GraphNode, E: GraphEdge>(graph: &Graph<N, E>, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("digraph G {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=ellipse];\n\n");

    for (position, node) in graph.nodes().iter().enumerate() {
        let mut label = escape_dot_label(&node.label(options.node_label.as_deref()));

        for prop_name in &options.show_properties {
            let value = node.label(Some(prop_name.as_str()));
            if !value.is_empty() {
                label.push_str(&format!("\\n{}:{}", prop_name, escape_dot_label(&value)));
            }
        }

        output.push_str(&format!("    n{position} [label=\"{label}\"];\n"));
    }

    if options.rank_rows {
        let layout = Layout::compute(graph);
        for row in layout.rows().iter().filter(|row| row.len() > 1) {
            let members: Vec<String> = row.iter().map(|p| format!("n{p};")).collect();
            output.push_str(&format!("    {{ rank=same; {} }}\n", members.join(" ")));
        }
    }

    output.push('\n');

    for edge in graph.edges() {
        let (Some(source), Some(target)) = (
            graph.node_position(&edge.source()),
            graph.node_position(&edge.target()),
        ) else {
            continue;
        };
        let label = edge.label();
        if label.is_empty() {
            output.push_str(&format!("    n{source} -> n{target};\n"));
        } else {
            output.push_str(&format!(
                "    n{source} -> n{target} [label=\"{}\"];\n",
                escape_dot_label(&label)
            ));
        }
    }

    output.push_str("}\n");

    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
