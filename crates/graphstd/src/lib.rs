//! # graphstd
//!
//! A small, immutable directed-graph container with traversal and reduction.
//!
//! ## Core Principles
//!
//! - **Immutable**: a [`Graph`] never changes after construction; `reverse` and
//!   `slice` return new graphs
//! - **Deterministic**: node insertion order breaks every traversal tie
//! - **Cycle tolerant**: the best-effort [`Walk`] never fails, so looping
//!   structures such as state machines can be traversed and reduced
//! - **Bring your own payload**: anything implementing [`GraphNode`] /
//!   [`GraphEdge`] can be stored
//!
//! ## Architecture
//!
//! ```text
//! Rendering (layout, SVG, DOT)
//!     ↓
//! Traversal & Reduction (topological order, walk, slice, reduce)
//!     ↓
//! Graph Store (nodes, edges, id lookups)
//!     ↑
//! Construction (builder, edge-only and JSON definitions)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use graphstd::{Graph, Node};
//!
//! // 10 - 4, written as an operator node pointing at its operands
//! let graph = Graph::from_json(r#"{
//!     "nodes": [
//!         { "id": 1, "op": "-" },
//!         { "id": 2, "value": 10 },
//!         { "id": 3, "value": 4 }
//!     ],
//!     "edges": [[1, 2], [1, 3]]
//! }"#).unwrap();
//!
//! // Reverse so operands feed their operator, then fold
//! let result = graph
//!     .reverse()
//!     .reduce_nodes(0, |inputs, node: &Node| match node.properties.get_string("op") {
//!         Some("-") => match inputs {
//!             [Some(a), Some(b)] => **a - **b,
//!             _ => 0,
//!         },
//!         _ => node.properties.get_int("value").unwrap_or(0),
//!     })
//!     .unwrap();
//! assert_eq!(result, 6);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod render;

// Re-export main types
pub use builder::{GraphBuilder, GraphDefinition};
pub use error::{GraphError, Result};
pub use graph::{
    Edge, EdgeIndex, Graph, GraphEdge, GraphNode, Identity, Node, NodeIndex, PropertyMap,
    PropertyValue, TopologicalOrder, Visit, Walk,
};
pub use render::{render_dot, render_svg, write_svg, DotOptions, Layout, SvgOptions};
