//! Fold a graph into a single value by propagating values along edges.
//!
//! Values flow in best-effort walk order. A node's value is computed from the
//! values of its incoming edges; an edge's value is computed from its source
//! node's value. The result is the value of the graph's only sink.
//!
//! Reduce a graph directly to push values from roots toward sinks, or reduce
//! [`Graph::reverse`] to pull leaf values up into the original root, as when
//! evaluating an expression tree whose operator nodes point at their operands.

use super::algorithms::Visit;
use super::store::Graph;
use super::types::{EdgeIndex, GraphEdge, GraphNode, Identity};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::HashMap;

impl<N: GraphNode, E: GraphEdge> Graph<N, E> {
    /// Reduce the graph with a node combiner and an edge combiner.
    ///
    /// `nodes` receives one entry per incoming edge, in incoming-edge order.
    /// An entry is `None` when that edge has not been walked yet, which only
    /// happens when a cycle was broken at this node.
    ///
    /// `initial` is returned when the graph is empty.
    ///
    /// # Errors
    ///
    /// - [`GraphError::AmbiguousOutput`] if the graph has more than one sink.
    /// - [`GraphError::MissingSourceValue`] if an edge is reached before its
    ///   source node has a value. The walk emits every edge right after its
    ///   source node, so this indicates a broken traversal invariant rather
    ///   than bad input.
    pub fn reduce<T, FN, FE>(&self, initial: T, mut nodes: FN, mut edges: FE) -> Result<T>
    where
        FN: FnMut(&[Option<&T>], &N) -> T,
        FE: FnMut(&T, &E) -> T,
    {
        debug!(
            "Reducing graph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        );

        let mut node_values: HashMap<&Identity, T> = HashMap::with_capacity(self.node_count());
        let mut edge_values: HashMap<EdgeIndex, T> = HashMap::with_capacity(self.edge_count());
        let mut last_node: Option<&Identity> = None;

        for visit in self.walk() {
            match visit {
                Visit::Node { index, node } => {
                    let Some(id) = self.id_at(index) else {
                        continue;
                    };
                    let inputs: Vec<Option<&T>> = self
                        .in_edge_indices(id)
                        .iter()
                        .map(|edge| edge_values.get(edge))
                        .collect();
                    let value = nodes(&inputs, node);
                    trace!("Node {id} reduced from {} inputs", inputs.len());
                    node_values.insert(id, value);
                    last_node = Some(id);
                }
                Visit::Edge { index, edge } => {
                    let source_value = self
                        .source_of(index)
                        .and_then(|source| node_values.get(source))
                        .ok_or_else(|| GraphError::MissingSourceValue {
                            edge: index,
                            source_id: edge.source().to_string(),
                        })?;
                    let value = edges(source_value, edge);
                    edge_values.insert(index, value);
                }
            }
        }

        let sinks: Vec<Identity> = self.sinks().into_iter().map(GraphNode::id).collect();
        match sinks.as_slice() {
            [] => {
                // Fully cyclic (or empty): fall back to the last node computed
                debug!("No sink node, returning last visited value");
                Ok(last_node
                    .and_then(|id| node_values.remove(id))
                    .unwrap_or(initial))
            }
            [sink] => node_values
                .remove(sink)
                .ok_or_else(|| GraphError::NodeNotFound {
                    node_id: sink.to_string(),
                }),
            many => Err(GraphError::AmbiguousOutput {
                sinks: many.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    /// Reduce with an edge combiner that passes the source value through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::reduce`].
    pub fn reduce_nodes<T, FN>(&self, initial: T, nodes: FN) -> Result<T>
    where
        T: Clone,
        FN: FnMut(&[Option<&T>], &N) -> T,
    {
        self.reduce(initial, nodes, |value: &T, _: &E| value.clone())
    }
}
