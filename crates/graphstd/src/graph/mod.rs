//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Identity`], [`GraphNode`], [`GraphEdge`]: what the engine needs from payloads
//! - [`Node`] and [`Edge`]: stock payloads with free-form attributes
//! - [`Graph`]: the immutable store with id lookups
//! - [`algorithms`]: topological order, best-effort walk, slicing
//! - reduce: folding the graph into one value

mod property;
mod reduce;
mod store;
mod types;
pub mod algorithms;

pub use algorithms::{TopologicalOrder, Visit, Walk};
pub use property::{PropertyMap, PropertyValue};
pub use store::Graph;
pub use types::{Edge, EdgeIndex, GraphEdge, GraphNode, Identity, Node, NodeIndex};
