//! Graph construction from loosely specified inputs.
//!
//! The engine only needs finalized node and edge sequences. This module turns
//! the compact forms people actually write into those sequences:
//!
//! - edges only, with the node list derived from edge endpoints
//! - tuple edges `[source, target]` or `[source, target, {attrs}]`
//! - JSON graph definitions mixing both edge forms
//!
//! # Example
//!
//! ```
//! use graphstd::Graph;
//!
//! let graph = Graph::from_json(r#"{ "edges": [["A", "B"], ["B", "C", { "count": 2 }]] }"#).unwrap();
//! assert_eq!(graph.node_count(), 3);
//! ```

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, GraphEdge, Identity, Node, PropertyMap, PropertyValue};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::hash::Hash;

/// Stable dedup: keeps the first item for each key, in input order.
pub fn uniq_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Node list implied by a set of edges: every source then target, in edge
/// order, first occurrence wins.
pub fn nodes_from_edges(edges: &[Edge]) -> Vec<Node> {
    let endpoints = edges
        .iter()
        .flat_map(|edge| [edge.source(), edge.target()]);
    uniq_by(endpoints, Identity::clone)
        .into_iter()
        .map(Node::new)
        .collect()
}

fn properties_from_json(attributes: Map<String, Value>) -> PropertyMap {
    attributes
        .iter()
        .map(|(key, value)| (key.clone(), PropertyValue::from_json(value)))
        .collect()
}

/// A node as written in a graph definition: an `id` plus any other keys.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDefinition {
    /// Node identity
    pub id: Identity,
    /// Every other key, kept as attributes
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<NodeDefinition> for Node {
    fn from(def: NodeDefinition) -> Self {
        Node::with_properties(def.id, properties_from_json(def.attributes))
    }
}

/// An edge as written in a graph definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EdgeDefinition {
    /// `{ "source": .., "target": .., ...attrs }`
    Object {
        /// Source node identity
        source: Identity,
        /// Target node identity
        target: Identity,
        /// Every other key, kept as attributes
        #[serde(flatten)]
        attributes: Map<String, Value>,
    },
    /// `[source, target, { ...attrs }]`
    Triple(Identity, Identity, Map<String, Value>),
    /// `[source, target]`
    Pair(Identity, Identity),
}

impl From<EdgeDefinition> for Edge {
    fn from(def: EdgeDefinition) -> Self {
        match def {
            EdgeDefinition::Object {
                source,
                target,
                attributes,
            }
            | EdgeDefinition::Triple(source, target, attributes) => {
                Edge::with_properties(source, target, properties_from_json(attributes))
            }
            EdgeDefinition::Pair(source, target) => Edge::new(source, target),
        }
    }
}

/// A serialized graph: optional nodes plus edges in any supported form.
///
/// When `nodes` is absent the node list is derived from the edges. An explicit
/// empty list is kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDefinition {
    /// Explicit nodes, in traversal tie-break order
    #[serde(default)]
    pub nodes: Option<Vec<NodeDefinition>>,
    /// Edges, in edge order
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    /// Normalize into a graph.
    pub fn into_graph(self) -> Graph {
        let edges: Vec<Edge> = self.edges.into_iter().map(Edge::from).collect();
        let nodes = match self.nodes {
            Some(nodes) => nodes.into_iter().map(Node::from).collect(),
            None => nodes_from_edges(&edges),
        };
        Graph::new(nodes, edges)
    }
}

impl Graph<Node, Edge> {
    /// Build a graph whose nodes are derived from the edge endpoints.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let nodes = nodes_from_edges(&edges);
        Graph::new(nodes, edges)
    }

    /// Decode a JSON graph definition.
    ///
    /// Ids keep their JSON type: `"1"` and `1` name different nodes. An edge
    /// written `["1", 2]` against numeric node ids points at a node that does
    /// not exist. Use [`GraphBuilder::strict`] to reject such edges up front.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if the text is not a valid definition.
    pub fn from_json(text: &str) -> Result<Self> {
        let definition: GraphDefinition = serde_json::from_str(text)
            .map_err(|e| GraphError::parse("Invalid graph definition", Some(e)))?;
        Ok(definition.into_graph())
    }

    /// Decode an already-parsed JSON graph definition.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if the value is not a valid definition.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let definition: GraphDefinition = serde_json::from_value(value)
            .map_err(|e| GraphError::parse("Invalid graph definition", Some(e)))?;
        Ok(definition.into_graph())
    }
}

/// Incremental graph construction.
///
/// ```
/// use graphstd::{GraphBuilder, PropertyMap};
///
/// let graph = GraphBuilder::new()
///     .edge_with("shiny gold", "dark red", PropertyMap::new().with("count", 2))
///     .edge_with("dark red", "dark orange", PropertyMap::new().with("count", 2))
///     .build()
///     .unwrap();
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Option<Vec<Node>>,
    edges: Vec<Edge>,
    strict: bool,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with no attributes.
    ///
    /// Once any node is declared, nodes are no longer derived from edges.
    pub fn node(self, id: impl Into<Identity>) -> Self {
        self.push_node(Node::new(id))
    }

    /// Declare a node with attributes.
    pub fn node_with(self, id: impl Into<Identity>, properties: PropertyMap) -> Self {
        self.push_node(Node::with_properties(id, properties))
    }

    /// Add an edge with no attributes.
    pub fn edge(mut self, source: impl Into<Identity>, target: impl Into<Identity>) -> Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with(
        mut self,
        source: impl Into<Identity>,
        target: impl Into<Identity>,
        properties: PropertyMap,
    ) -> Self {
        self.edges
            .push(Edge::with_properties(source, target, properties));
        self
    }

    /// Reject edges whose endpoints are not declared nodes.
    ///
    /// Endpoints are matched by [`Identity`], so a string endpoint never
    /// matches an integer node.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn push_node(mut self, node: Node) -> Self {
        self.nodes.get_or_insert_with(Vec::new).push(node);
        self
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`GraphError::DanglingEdge`] for the first edge
    /// with an endpoint that is not a declared node.
    pub fn build(self) -> Result<Graph> {
        let nodes = match self.nodes {
            Some(nodes) => nodes,
            None => nodes_from_edges(&self.edges),
        };

        if self.strict {
            let known: HashSet<&Identity> = nodes.iter().map(|node| &node.id).collect();
            for (position, edge) in self.edges.iter().enumerate() {
                for endpoint in [&edge.source, &edge.target] {
                    if !known.contains(endpoint) {
                        return Err(GraphError::DanglingEdge {
                            edge: position,
                            node_id: endpoint.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            "Builder produced {} nodes and {} edges",
            nodes.len(),
            self.edges.len()
        );
        Ok(Graph::new(nodes, self.edges))
    }
}
