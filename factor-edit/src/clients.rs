mod dummy_edge_highlighter;
mod dummy_factor_graph;

pub use dummy_edge_highlighter::*;
pub use dummy_factor_graph::*;
