//! Unit tests for layout, SVG and DOT rendering.

use graphstd::render::Placement;
use graphstd::{
    render_dot, render_svg, DotOptions, Edge, Graph, Identity, Layout, Node, PropertyMap,
    SvgOptions,
};

fn fixed_id() -> SvgOptions {
    SvgOptions {
        element_id: Some("g1".to_string()),
        ..SvgOptions::default()
    }
}

fn bags() -> Graph {
    let count = |n: i64| PropertyMap::new().with("count", n);
    Graph::new(
        vec![
            Node::new("shiny gold"),
            Node::new("dark olive"),
            Node::new("vibrant plum"),
        ],
        vec![
            Edge::with_properties("shiny gold", "dark olive", count(1)),
            Edge::with_properties("shiny gold", "vibrant plum", count(2)),
        ],
    )
}

#[test]
fn test_layout_chain_is_one_column() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(1, 2), Edge::new(2, 3)],
    );
    let layout = Layout::compute(&graph);
    assert_eq!(layout.row_count(), 3);
    assert_eq!(layout.widest_row(), 1);
    assert_eq!(
        layout.placement(&Identity::Int(3)),
        Some(Placement { row: 2, column: 0 })
    );
}

#[test]
fn test_layout_uses_deepest_predecessor() {
    // 1 -> 2 -> 3 and a shortcut 1 -> 3
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)],
    );
    let layout = Layout::compute(&graph);
    assert_eq!(layout.placement(&Identity::Int(3)).map(|p| p.row), Some(2));
}

#[test]
fn test_layout_of_empty_graph() {
    let graph: Graph = Graph::default();
    let layout = Layout::compute(&graph);
    assert_eq!(layout.row_count(), 0);
    assert_eq!(layout.widest_row(), 0);
    assert_eq!(layout.row_len(5), 0);
}

#[test]
fn test_svg_has_one_group_per_node_and_one_path_per_edge() {
    let svg = render_svg(&bags(), &fixed_id());
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<g class=\"node\"").count(), 3);
    assert_eq!(svg.matches("class=\"edgepath\"").count(), 2);
    assert!(svg.contains("<textPath href=\"#g1-edgepath1\" startOffset=\"50%\">2</textPath>"));
}

#[test]
fn test_svg_scopes_style_to_element_id() {
    let svg = render_svg(&bags(), &fixed_id());
    assert!(svg.contains("id=\"g1\""));
    assert!(svg.contains("#g1 .edgepath"));
    assert!(svg.contains("marker id=\"g1-arrowhead\""));
    assert!(svg.contains("marker-end=\"url(#g1-arrowhead)\""));
}

#[test]
fn test_svg_generates_distinct_ids() {
    let graph = bags();
    let first = render_svg(&graph, &SvgOptions::default());
    let second = render_svg(&graph, &SvgOptions::default());
    assert!(first.contains("id=\"gstd-"));
    assert_ne!(first, second);
}

#[test]
fn test_svg_short_labels_draw_circles() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2)],
        vec![Edge::new(1, 2)],
    );
    let svg = render_svg(&graph, &fixed_id());
    assert_eq!(svg.matches("<circle r=\"20\"/>").count(), 2);
    assert!(svg.contains("viewBox=\"0 0 100 200\""));
    assert!(svg.contains("d=\"M 50 70 L 50 130\""));
}

#[test]
fn test_svg_long_labels_skip_circles() {
    let svg = render_svg(&bags(), &fixed_id());
    assert!(!svg.contains("<circle"));
    assert!(svg.contains("<text>shiny gold</text>"));
}

#[test]
fn test_svg_node_label_attribute() {
    let graph: Graph = Graph::new(
        vec![Node::with_properties(1, PropertyMap::new().with("name", "a<b"))],
        vec![],
    );
    let options = SvgOptions {
        node_label: Some("name".to_string()),
        ..fixed_id()
    };
    let svg = render_svg(&graph, &options);
    assert!(svg.contains("<text>a&lt;b</text>"));
}

#[test]
fn test_dot_structure() {
    let dot = render_dot(&bags(), &DotOptions::default());
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("n0 [label=\"shiny gold\"];"));
    assert!(dot.contains("n0 -> n1 [label=\"1\"];"));
    assert!(dot.contains("n0 -> n2 [label=\"2\"];"));
    assert!(dot.contains("{ rank=same; n1; n2; }"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_without_rank_rows() {
    let options = DotOptions {
        rank_rows: false,
        rankdir: "LR".to_string(),
        ..DotOptions::default()
    };
    let dot = render_dot(&bags(), &options);
    assert!(dot.contains("rankdir=LR;"));
    assert!(!dot.contains("rank=same"));
}

#[test]
fn test_dot_shows_properties() {
    let graph: Graph = Graph::new(
        vec![Node::with_properties("x", PropertyMap::new().with("op", "+"))],
        vec![],
    );
    let options = DotOptions {
        show_properties: vec!["op".to_string(), "missing".to_string()],
        ..DotOptions::default()
    };
    let dot = render_dot(&graph, &options);
    assert!(dot.contains("n0 [label=\"x\\nop:+\"];"));
}

#[test]
fn test_dot_skips_dangling_edges() {
    let graph = Graph::new(vec![Node::new("a")], vec![Edge::new("a", "ghost")]);
    let dot = render_dot(&graph, &DotOptions::default());
    assert!(!dot.contains("->"));
}
