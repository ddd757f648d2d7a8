//! Error types for graphstd operations.
//!
//! Lookups never fail: absent ids come back as `None` or an empty edge list.
//! Only the operations with no meaningful answer return a [`GraphError`].

use thiserror::Error;

/// Result type alias for graphstd operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Strict topological ordering stalled because the unvisited nodes form a cycle.
    #[error("Graph cannot be topologically traversed: cycle among [{}]", remaining.join(", "))]
    CycleDetected {
        /// Ids of the nodes that were still waiting on an unseen predecessor
        remaining: Vec<String>,
    },

    /// Reduce found more than one sink, so there is no single result.
    #[error("Graph has multiple output nodes: [{}]", sinks.join(", "))]
    AmbiguousOutput {
        /// Ids of every sink node
        sinks: Vec<String>,
    },

    /// Reduce reached an edge before its source node produced a value.
    #[error("Edge {edge} has no value for its source node {source_id}")]
    MissingSourceValue {
        /// Position of the edge in the graph's edge sequence
        edge: usize,
        /// Id of the source node
        source_id: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// An edge references a node id that was never declared
    #[error("Edge {edge} references unknown node {node_id}")]
    DanglingEdge {
        /// Position of the edge in the graph's edge sequence
        edge: usize,
        /// The unresolved endpoint
        node_id: String,
    },

    /// A graph definition could not be decoded
    #[error("Parse error: {message}")]
    Parse {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing rendered output failed
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a parse error from a message and optional source.
    pub fn parse<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
