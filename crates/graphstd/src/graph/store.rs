//! The immutable graph store.

use super::types::{Edge, EdgeIndex, GraphEdge, GraphNode, Identity, Node, NodeIndex};
use log::debug;
use std::collections::HashMap;

/// An ordered sequence of nodes and an ordered sequence of directed edges.
///
/// Node order is the tie-break for every traversal decision, so it is kept
/// exactly as given. The graph is never mutated after construction; operations
/// such as [`Graph::reverse`] and [`Graph::slice`] build a new one.
#[derive(Debug, Clone)]
pub struct Graph<N = Node, E = Edge> {
    nodes: Vec<N>,
    edges: Vec<E>,
    // Cached node identities, parallel to `nodes`
    node_ids: Vec<Identity>,
    // First node position for each identity
    node_index: HashMap<Identity, NodeIndex>,
    // Edge positions keyed by endpoint identity, in edge order
    outgoing: HashMap<Identity, Vec<EdgeIndex>>,
    incoming: HashMap<Identity, Vec<EdgeIndex>>,
    // Source identities, parallel to `edges`
    edge_sources: Vec<Identity>,
}

impl<N: GraphNode, E: GraphEdge> Graph<N, E> {
    /// Create a graph from finalized node and edge collections.
    ///
    /// Edges are not validated against the node list. Traversal and reduce are
    /// only well defined when every endpoint resolves to a node.
    pub fn new(nodes: Vec<N>, edges: Vec<E>) -> Self {
        let node_ids: Vec<Identity> = nodes.iter().map(GraphNode::id).collect();

        let mut node_index = HashMap::with_capacity(node_ids.len());
        for (position, id) in node_ids.iter().enumerate() {
            node_index.entry(id.clone()).or_insert(position);
        }

        let mut outgoing: HashMap<Identity, Vec<EdgeIndex>> = HashMap::new();
        let mut incoming: HashMap<Identity, Vec<EdgeIndex>> = HashMap::new();
        let mut edge_sources = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let (source, target) = (edge.source(), edge.target());
            outgoing.entry(source.clone()).or_default().push(position);
            incoming.entry(target).or_default().push(position);
            edge_sources.push(source);
        }

        debug!("Built graph: {} nodes, {} edges", nodes.len(), edges.len());

        Self {
            nodes,
            edges,
            node_ids,
            node_index,
            outgoing,
            incoming,
            edge_sources,
        }
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identity of a node.
    pub fn node_id(&self, node: &N) -> Identity {
        node.id()
    }

    /// Find a node by identity.
    pub fn find_node(&self, id: impl Into<Identity>) -> Option<&N> {
        self.node_position(&id.into())
            .and_then(|position| self.nodes.get(position))
    }

    /// Edges leaving `id`, in edge insertion order. Empty for unknown ids.
    pub fn out_edges(&self, id: impl Into<Identity>) -> Vec<&E> {
        self.resolve(self.out_edge_indices(&id.into()))
    }

    /// Edges entering `id`, in edge insertion order. Empty for unknown ids.
    pub fn in_edges(&self, id: impl Into<Identity>) -> Vec<&E> {
        self.resolve(self.in_edge_indices(&id.into()))
    }

    /// Nodes with no outgoing edges, in node order.
    pub fn sinks(&self) -> Vec<&N> {
        self.node_ids
            .iter()
            .zip(&self.nodes)
            .filter(|(id, _)| self.out_edge_indices(id).is_empty())
            .map(|(_, node)| node)
            .collect()
    }

    /// Nodes with no incoming edges, in node order.
    pub fn sources(&self) -> Vec<&N> {
        self.node_ids
            .iter()
            .zip(&self.nodes)
            .filter(|(id, _)| self.in_edge_indices(id).is_empty())
            .map(|(_, node)| node)
            .collect()
    }

    /// Position of the first node with identity `id`.
    pub fn node_position(&self, id: &Identity) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Positions of the edges leaving `id`.
    pub fn out_edge_indices(&self, id: &Identity) -> &[EdgeIndex] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of the edges entering `id`.
    pub fn in_edge_indices(&self, id: &Identity) -> &[EdgeIndex] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cached identity of the node at `position`.
    pub(crate) fn id_at(&self, position: NodeIndex) -> Option<&Identity> {
        self.node_ids.get(position)
    }

    /// Cached source identity of the edge at `position`.
    pub(crate) fn source_of(&self, position: EdgeIndex) -> Option<&Identity> {
        self.edge_sources.get(position)
    }

    fn resolve(&self, positions: &[EdgeIndex]) -> Vec<&E> {
        positions.iter().filter_map(|&p| self.edges.get(p)).collect()
    }

    /// A new graph with the same nodes and every edge flipped.
    ///
    /// Edge order and edge attributes are preserved.
    pub fn reverse(&self) -> Self
    where
        N: Clone,
    {
        debug!("Reversing graph with {} edges", self.edges.len());
        Graph::new(
            self.nodes.clone(),
            self.edges.iter().map(GraphEdge::reversed).collect(),
        )
    }
}

impl<N: GraphNode, E: GraphEdge> Default for Graph<N, E> {
    fn default() -> Self {
        Graph::new(Vec::new(), Vec::new())
    }
}
