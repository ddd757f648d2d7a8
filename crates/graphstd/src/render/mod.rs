//! Visualization of graphs.
//!
//! Rendering only consumes the best-effort walk order and node/edge labels; it
//! has no influence on traversal or reduction.
//!
//! - **SVG**: standalone image, grid layout
//! - **DOT**: Graphviz source with the same row grouping

pub mod dot;
pub mod layout;
pub mod svg;

pub use dot::{render_dot, DotOptions};
pub use layout::{Layout, Placement};
pub use svg::{render_svg, write_svg, SvgOptions};
