mod edge_highlighter;
mod factor_graph;

pub use edge_highlighter::*;
pub use factor_graph::*;
