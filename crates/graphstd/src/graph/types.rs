//! Core graph types: identities, the node/edge capability traits, and the
//! stock [`Node`] and [`Edge`] payloads.

use super::property::{PropertyMap, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an edge in its graph's edge sequence.
///
/// Edges are distinguished by instance, not by endpoints, so parallel edges
/// between the same pair of nodes have different indices.
pub type EdgeIndex = usize;

/// Position of a node in its graph's node sequence.
pub type NodeIndex = usize;

/// Identity of a node.
///
/// String and integer keys never compare equal to each other: `Int(1)` and
/// `Str("1")` are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Int(i) => write!(f, "{i}"),
            Identity::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Identity::Str(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Identity::Str(value)
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        Identity::Int(value)
    }
}

impl From<i32> for Identity {
    fn from(value: i32) -> Self {
        Identity::Int(i64::from(value))
    }
}

impl From<u32> for Identity {
    fn from(value: u32) -> Self {
        Identity::Int(i64::from(value))
    }
}

impl From<&Identity> for Identity {
    fn from(value: &Identity) -> Self {
        value.clone()
    }
}

/// Capability required of every node payload.
pub trait GraphNode {
    /// The node's identity. Must be stable and unique within a graph.
    fn id(&self) -> Identity;

    /// Text shown for the node when rendering. `key` names an attribute to
    /// use instead of the id; payloads without attributes can ignore it.
    fn label(&self, key: Option<&str>) -> String {
        let _ = key;
        self.id().to_string()
    }
}

/// Capability required of every edge payload.
pub trait GraphEdge {
    /// Identity of the node this edge leaves.
    fn source(&self) -> Identity;

    /// Identity of the node this edge enters.
    fn target(&self) -> Identity;

    /// A copy of this edge with source and target swapped and every other
    /// attribute preserved.
    fn reversed(&self) -> Self
    where
        Self: Sized;

    /// Text shown along the edge when rendering.
    fn label(&self) -> String {
        String::new()
    }
}

/// A node carrying an identity and free-form attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the graph
    pub id: Identity,
    /// Arbitrary attributes
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl Node {
    /// Create a node with no attributes.
    pub fn new(id: impl Into<Identity>) -> Self {
        Self {
            id: id.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a node with attributes.
    pub fn with_properties(id: impl Into<Identity>, properties: PropertyMap) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    /// Get an attribute value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl GraphNode for Node {
    fn id(&self) -> Identity {
        self.id.clone()
    }

    fn label(&self, key: Option<&str>) -> String {
        match key {
            Some(key) => self
                .properties
                .get(key)
                .map(ToString::to_string)
                .unwrap_or_default(),
            None => self.id.to_string(),
        }
    }
}

/// A directed edge between two node identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node identity
    pub source: Identity,
    /// Target node identity
    pub target: Identity,
    /// Optional attributes (weight, count, ...)
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl Edge {
    /// Create an edge with no attributes.
    pub fn new(source: impl Into<Identity>, target: impl Into<Identity>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create an edge with attributes.
    pub fn with_properties(
        source: impl Into<Identity>,
        target: impl Into<Identity>,
        properties: PropertyMap,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            properties,
        }
    }

    /// Get an attribute value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl GraphEdge for Edge {
    fn source(&self) -> Identity {
        self.source.clone()
    }

    fn target(&self) -> Identity {
        self.target.clone()
    }

    fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            properties: self.properties.clone(),
        }
    }

    /// `weight`, then `id`, then the first remaining attribute.
    fn label(&self) -> String {
        self.properties
            .get("weight")
            .or_else(|| self.properties.get("id"))
            .or_else(|| self.properties.iter().next().map(|(_, v)| v))
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
