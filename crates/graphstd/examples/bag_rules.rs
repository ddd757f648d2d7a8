//! Count how many bags a shiny gold bag must contain.
//!
//! Run with: cargo run -p graphstd --example bag_rules

use graphstd::{Edge, Graph, GraphBuilder, Node, PropertyMap, Result};

fn rules() -> Result<Graph> {
    let count = |n: i64| PropertyMap::new().with("count", n);
    GraphBuilder::new()
        .edge_with("light red", "bright white", count(1))
        .edge_with("light red", "muted yellow", count(2))
        .edge_with("bright white", "shiny gold", count(1))
        .edge_with("muted yellow", "shiny gold", count(2))
        .edge_with("shiny gold", "dark olive", count(1))
        .edge_with("shiny gold", "vibrant plum", count(2))
        .edge_with("dark olive", "faded blue", count(3))
        .edge_with("dark olive", "dotted black", count(4))
        .edge_with("vibrant plum", "faded blue", count(5))
        .edge_with("vibrant plum", "dotted black", count(6))
        .build()
}

fn main() -> Result<()> {
    let graph = rules()?;

    let order: Vec<String> = graph
        .topological_sort()?
        .iter()
        .map(|node| node.id.to_string())
        .collect();
    println!("Packing order: {}", order.join(" -> "));

    let inside = graph.slice("shiny gold").reverse();
    let total = inside.reduce(
        0i64,
        |inputs, _: &Node| 1 + inputs.iter().flatten().copied().sum::<i64>(),
        |value, edge: &Edge| edge.properties.get_int("count").unwrap_or(0) * value,
    )?;
    println!("A shiny gold bag holds {} other bags", total - 1);

    Ok(())
}
