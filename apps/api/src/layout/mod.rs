// Career tree layout: footprint-balanced node positions plus edges for the diagram widget.
// Pure and synchronous; recomputed from scratch for every request.

pub mod handlers;
pub mod style;
pub mod tree;

// Re-export the public API consumed by other modules (state, generation tests).
pub use tree::{layout_tree, LayoutConfig, TreeLayout};
