//! Graph traversal algorithms.
//!
//! Two orders are provided:
//!
//! - [`TopologicalOrder`]: strict layering that fails on the first stalled round.
//! - [`Walk`]: a best-effort order that never fails. Cycles are broken by falling
//!   back to node insertion order, so the walk works on looping structures such
//!   as state machines.
//!
//! Both are lazy. Stopping iteration early is the only cancellation needed, and
//! each call starts from scratch with its own visited sets.

use super::store::Graph;
use super::types::{EdgeIndex, GraphEdge, GraphNode, Identity, NodeIndex};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Lazy strict topological order over a graph.
///
/// Each round releases every remaining node whose incoming edges all come from
/// already-emitted nodes, in node order. A round that releases nothing while
/// nodes remain yields [`GraphError::CycleDetected`] once, then the iterator ends.
pub struct TopologicalOrder<'g, N, E> {
    graph: &'g Graph<N, E>,
    pool: Vec<NodeIndex>,
    batch: VecDeque<NodeIndex>,
    seen: HashSet<&'g Identity>,
    failed: bool,
}

impl<'g, N: GraphNode, E: GraphEdge> TopologicalOrder<'g, N, E> {
    fn new(graph: &'g Graph<N, E>) -> Self {
        Self {
            graph,
            pool: (0..graph.node_count()).collect(),
            batch: VecDeque::new(),
            seen: HashSet::with_capacity(graph.node_count()),
            failed: false,
        }
    }

    fn is_ready(&self, position: NodeIndex) -> bool {
        let Some(id) = self.graph.id_at(position) else {
            return false;
        };
        self.graph.in_edge_indices(id).iter().all(|&edge| {
            self.graph
                .source_of(edge)
                .is_some_and(|source| self.seen.contains(source))
        })
    }
}

impl<'g, N: GraphNode, E: GraphEdge> Iterator for TopologicalOrder<'g, N, E> {
    type Item = Result<&'g N>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if let Some(position) = self.batch.pop_front() {
                if let Some(id) = graph.id_at(position) {
                    self.seen.insert(id);
                }
                return graph.nodes().get(position).map(Ok);
            }

            if self.failed || self.pool.is_empty() {
                return None;
            }

            let (ready, waiting): (Vec<NodeIndex>, Vec<NodeIndex>) =
                self.pool.iter().partition(|&&position| self.is_ready(position));

            if ready.is_empty() {
                self.failed = true;
                let remaining: Vec<String> = waiting
                    .iter()
                    .filter_map(|&position| graph.id_at(position))
                    .map(ToString::to_string)
                    .collect();
                debug!("Topological order stalled with {} nodes left", remaining.len());
                return Some(Err(GraphError::CycleDetected { remaining }));
            }

            trace!("Releasing batch of {} nodes", ready.len());
            self.pool = waiting;
            self.batch = ready.into();
        }
    }
}

/// One event of a best-effort [`Walk`].
#[derive(Debug)]
pub enum Visit<'g, N, E> {
    /// A node was reached
    Node {
        /// Position in the graph's node sequence
        index: NodeIndex,
        /// The node itself
        node: &'g N,
    },
    /// An outgoing edge of the most recently visited node
    Edge {
        /// Position in the graph's edge sequence
        index: EdgeIndex,
        /// The edge itself
        edge: &'g E,
    },
}

impl<N, E> Clone for Visit<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for Visit<'_, N, E> {}

impl<'g, N, E> Visit<'g, N, E> {
    /// The visited node, if this is a node event.
    pub fn node(&self) -> Option<&'g N> {
        match *self {
            Visit::Node { node, .. } => Some(node),
            Visit::Edge { .. } => None,
        }
    }

    /// The visited edge, if this is an edge event.
    pub fn edge(&self) -> Option<&'g E> {
        match *self {
            Visit::Edge { edge, .. } => Some(edge),
            Visit::Node { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Anchor {
    Unanchored,
    Start(NodeIndex),
    // The requested start is not part of the graph
    Missing,
}

/// Lazy best-effort traversal.
///
/// Each step selects one node, emits it, then emits every one of its outgoing
/// edges in edge order. Nodes and edges are emitted at most once.
///
/// Unanchored, the next node is the first unvisited node whose incoming edges
/// have all been emitted, falling back to the first unvisited node when a cycle
/// leaves no such candidate. Every node and edge is eventually emitted.
///
/// Anchored, the start node comes first; after that the next node is the first
/// unvisited node with at least one emitted incoming edge. The walk ends once
/// the reachable closure is exhausted.
pub struct Walk<'g, N, E> {
    graph: &'g Graph<N, E>,
    anchor: Anchor,
    seen_nodes: HashSet<&'g Identity>,
    seen_edges: Vec<bool>,
    pending: &'g [EdgeIndex],
}

impl<'g, N: GraphNode, E: GraphEdge> Walk<'g, N, E> {
    fn new(graph: &'g Graph<N, E>, anchor: Anchor) -> Self {
        Self {
            graph,
            anchor,
            seen_nodes: HashSet::with_capacity(graph.node_count()),
            seen_edges: vec![false; graph.edge_count()],
            pending: &[],
        }
    }

    fn node_seen(&self, position: NodeIndex) -> bool {
        self.graph
            .id_at(position)
            .is_some_and(|id| self.seen_nodes.contains(id))
    }

    fn edge_seen(&self, edge: EdgeIndex) -> bool {
        self.seen_edges.get(edge).copied().unwrap_or(false)
    }

    fn incoming(&self, position: NodeIndex) -> &'g [EdgeIndex] {
        let graph = self.graph;
        match graph.id_at(position) {
            Some(id) => graph.in_edge_indices(id),
            None => &[],
        }
    }

    fn select_next(&self) -> Option<NodeIndex> {
        let mut unvisited = (0..self.graph.node_count()).filter(|&p| !self.node_seen(p));
        match self.anchor {
            Anchor::Missing => None,
            Anchor::Start(start) if !self.node_seen(start) => Some(start),
            Anchor::Start(_) => unvisited.find(|&p| {
                let incoming = self.incoming(p);
                !incoming.is_empty() && incoming.iter().any(|&e| self.edge_seen(e))
            }),
            Anchor::Unanchored => {
                let candidates: Vec<NodeIndex> = unvisited.collect();
                candidates
                    .iter()
                    .copied()
                    .find(|&p| self.incoming(p).iter().all(|&e| self.edge_seen(e)))
                    .or_else(|| {
                        let fallback = candidates.first().copied();
                        if let Some(p) = fallback {
                            trace!("No ready node, breaking cycle at position {p}");
                        }
                        fallback
                    })
            }
        }
    }
}

impl<'g, N: GraphNode, E: GraphEdge> Iterator for Walk<'g, N, E> {
    type Item = Visit<'g, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        if let Some((&index, rest)) = self.pending.split_first() {
            self.pending = rest;
            if let Some(seen) = self.seen_edges.get_mut(index) {
                *seen = true;
            }
            return graph.edges().get(index).map(|edge| Visit::Edge { index, edge });
        }

        let index = self.select_next()?;
        let id = graph.id_at(index)?;
        let node = graph.nodes().get(index)?;
        self.seen_nodes.insert(id);
        self.pending = graph.out_edge_indices(id);
        Some(Visit::Node { index, node })
    }
}

impl<N: GraphNode, E: GraphEdge> Graph<N, E> {
    /// Lazy strict topological order.
    ///
    /// Within each round, ties are broken by node insertion order.
    pub fn topological_order(&self) -> TopologicalOrder<'_, N, E> {
        TopologicalOrder::new(self)
    }

    /// Collect the strict topological order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CycleDetected`] if the graph contains a cycle.
    pub fn topological_sort(&self) -> Result<Vec<&N>> {
        self.topological_order().collect()
    }

    /// Best-effort traversal over the whole graph.
    pub fn walk(&self) -> Walk<'_, N, E> {
        Walk::new(self, Anchor::Unanchored)
    }

    /// Best-effort traversal of everything reachable from `start`.
    ///
    /// Yields nothing if `start` is not a node of this graph. An unknown start
    /// never falls back to walking the whole graph, so [`Graph::slice`] of an
    /// unknown id is empty rather than a copy of the graph.
    pub fn walk_from(&self, start: impl Into<Identity>) -> Walk<'_, N, E> {
        let start = start.into();
        let anchor = match self.node_position(&start) {
            Some(position) => Anchor::Start(position),
            None => {
                debug!("Walk start {start} is not in the graph");
                Anchor::Missing
            }
        };
        Walk::new(self, anchor)
    }

    /// The subgraph reachable from `start`, including `start` itself.
    ///
    /// Nodes and edges keep the order in which the anchored walk emitted them.
    /// An unknown `start` gives an empty graph.
    pub fn slice(&self, start: impl Into<Identity>) -> Self
    where
        N: Clone,
        E: Clone,
    {
        let start = start.into();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();

        for visit in self.walk_from(&start) {
            match visit {
                Visit::Node { node, .. } => nodes.push(node.clone()),
                Visit::Edge { edge, .. } => edges.push(edge.clone()),
            }
        }

        debug!(
            "Sliced {} nodes and {} edges from {start}",
            nodes.len(),
            edges.len()
        );
        Graph::new(nodes, edges)
    }
}
