//! Row/column placement derived from the best-effort walk.
//!
//! A node's row is one more than the deepest already-placed predecessor, or 0
//! when none of its predecessors has been placed yet. Its column is its
//! position within the row, in walk order.

use crate::graph::{Graph, GraphEdge, GraphNode, Identity, NodeIndex, Visit};
use std::collections::HashMap;

/// Where a node sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Zero-based row
    pub row: usize,
    /// Zero-based position within the row
    pub column: usize,
}

/// Grid placement for every node of a graph.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rows: Vec<Vec<NodeIndex>>,
    placements: HashMap<Identity, Placement>,
}

impl Layout {
    /// Place every node of `graph`.
    pub fn compute<N: GraphNode, E: GraphEdge>(graph: &Graph<N, E>) -> Self {
        let mut layout = Layout::default();

        for visit in graph.walk() {
            let Visit::Node { index, .. } = visit else {
                continue;
            };
            let Some(id) = graph.id_at(index) else {
                continue;
            };

            let row = graph
                .in_edge_indices(id)
                .iter()
                .filter_map(|&edge| graph.source_of(edge))
                .filter_map(|source| layout.placements.get(source))
                .map(|placement| placement.row + 1)
                .max()
                .unwrap_or(0);

            if layout.rows.len() <= row {
                layout.rows.resize_with(row + 1, Vec::new);
            }
            let cells = &mut layout.rows[row];
            let column = cells.len();
            cells.push(index);
            layout.placements.insert(id.clone(), Placement { row, column });
        }

        layout
    }

    /// Node positions per row, in column order.
    pub fn rows(&self) -> &[Vec<NodeIndex>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn widest_row(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of nodes in `row`.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map(Vec::len).unwrap_or(0)
    }

    /// Placement of the node with identity `id`.
    pub fn placement(&self, id: &Identity) -> Option<Placement> {
        self.placements.get(id).copied()
    }
}
