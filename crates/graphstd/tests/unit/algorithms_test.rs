//! Unit tests for topological order, the best-effort walk and slicing.

use graphstd::{Edge, Graph, GraphError, Identity, Node, Visit, Walk};

fn chain(ids: &[i64]) -> Graph {
    let nodes = ids.iter().map(|&id| Node::new(id)).collect();
    let edges = ids.windows(2).map(|w| Edge::new(w[0], w[1])).collect();
    Graph::new(nodes, edges)
}

fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.to_string()).collect()
}

fn trace(walk: Walk<'_, Node, Edge>) -> Vec<String> {
    walk.map(|visit| match visit {
        Visit::Node { node, .. } => node.id.to_string(),
        Visit::Edge { edge, .. } => format!("{}->{}", edge.source, edge.target),
    })
    .collect()
}

#[test]
fn test_topological_sort_chain() {
    let graph = chain(&[1, 2, 3, 4]);
    let order = graph.topological_sort().unwrap();
    assert_eq!(ids(&order), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_topological_sort_ignores_node_order_across_rounds() {
    let graph = Graph::new(
        vec![Node::new("c"), Node::new("b"), Node::new("a")],
        vec![Edge::new("a", "b"), Edge::new("b", "c")],
    );
    let order = graph.topological_sort().unwrap();
    assert_eq!(ids(&order), vec!["a", "b", "c"]);
}

#[test]
fn test_topological_sort_empty_graph() {
    let graph: Graph = Graph::default();
    assert!(graph.topological_sort().unwrap().is_empty());
}

#[test]
fn test_topological_order_is_lazy() {
    let graph = chain(&[1, 2, 3]);
    let mut order = graph.topological_order();
    let first = order.next().unwrap().unwrap();
    assert_eq!(first.id, Identity::Int(1));
}

#[test]
fn test_cycle_yields_prefix_then_error() {
    // 1 is free; 2 and 3 form a loop
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 2)],
    );
    let items: Vec<_> = graph.topological_order().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap().id, Identity::Int(1));
    match &items[1] {
        Err(GraphError::CycleDetected { remaining }) => {
            assert_eq!(remaining, &vec!["2".to_string(), "3".to_string()]);
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_topological_sort_reports_cycle() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2)],
        vec![Edge::new(1, 2), Edge::new(2, 1)],
    );
    let err = graph.topological_sort().unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn test_walk_emits_edges_after_their_source() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3), Node::new(4)],
        vec![
            Edge::new(1, 2),
            Edge::new(1, 3),
            Edge::new(2, 4),
            Edge::new(3, 4),
        ],
    );
    assert_eq!(
        trace(graph.walk()),
        vec!["1", "1->2", "1->3", "2", "2->4", "3", "3->4", "4"]
    );
}

#[test]
fn test_walk_waits_for_all_inputs() {
    // 3 is listed before 2 but depends on it
    let graph = Graph::new(
        vec![Node::new(1), Node::new(3), Node::new(2)],
        vec![Edge::new(1, 3), Edge::new(1, 2), Edge::new(2, 3)],
    );
    assert_eq!(
        trace(graph.walk()),
        vec!["1", "1->3", "1->2", "2", "2->3", "3"]
    );
}

#[test]
fn test_walk_three_node_cycle() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)],
    );
    assert_eq!(
        trace(graph.walk()),
        vec!["1", "1->2", "2", "2->3", "3", "3->1"]
    );
}

#[test]
fn test_walk_is_deterministic() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(2, 1), Edge::new(3, 2), Edge::new(1, 3)],
    );
    assert_eq!(trace(graph.walk()), trace(graph.walk()));
}

#[test]
fn test_walk_visits_disconnected_nodes() {
    let graph: Graph = Graph::new(vec![Node::new("x"), Node::new("y")], vec![]);
    assert_eq!(trace(graph.walk()), vec!["x", "y"]);
}

#[test]
fn test_walk_from_skips_unreachable() {
    let graph = Graph::new(
        vec![Node::new(0), Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(3, 2)],
    );
    assert_eq!(trace(graph.walk_from(1)), vec!["1", "1->2", "2"]);
}

#[test]
fn test_walk_from_follows_cycle_back() {
    let graph = Graph::new(
        vec![Node::new(1), Node::new(2)],
        vec![Edge::new(1, 2), Edge::new(2, 1)],
    );
    assert_eq!(trace(graph.walk_from(2)), vec!["2", "2->1", "1", "1->2"]);
}

#[test]
fn test_visit_accessors() {
    let graph = chain(&[1, 2]);
    let visits: Vec<_> = graph.walk().collect();
    assert_eq!(visits[0].node().map(|n| &n.id), Some(&Identity::Int(1)));
    assert!(visits[0].edge().is_none());
    assert!(visits[1].edge().is_some());
    assert!(visits[1].node().is_none());
}

#[test]
fn test_slice_keeps_walk_order() {
    let graph = Graph::new(
        vec![Node::new(0), Node::new(1), Node::new(2), Node::new(3)],
        vec![Edge::new(0, 1), Edge::new(1, 3), Edge::new(1, 2)],
    );
    let slice = graph.slice(1);
    let nodes: Vec<String> = slice.nodes().iter().map(|n| n.id.to_string()).collect();
    assert_eq!(nodes, vec!["1", "2", "3"]);
    let edges: Vec<(Identity, Identity)> = slice
        .edges()
        .iter()
        .map(|e| (e.source.clone(), e.target.clone()))
        .collect();
    assert_eq!(
        edges,
        vec![
            (Identity::Int(1), Identity::Int(3)),
            (Identity::Int(1), Identity::Int(2)),
        ]
    );
}

#[test]
fn test_slice_of_isolated_node() {
    let graph = Graph::new(
        vec![Node::new("a"), Node::new("b")],
        vec![Edge::new("a", "b")],
    );
    let slice = graph.slice("b");
    assert_eq!(slice.node_count(), 1);
    assert_eq!(slice.edge_count(), 0);
}

#[test]
fn test_slice_of_unknown_start_is_empty() {
    let graph = chain(&[1, 2]);
    let slice = graph.slice(42);
    assert!(slice.is_empty());
    assert_eq!(slice.edge_count(), 0);
}
