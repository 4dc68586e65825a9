//! The word-adjacency graph and its rendering

pub mod dot;
pub mod word_graph;

pub use dot::to_dot;
pub use word_graph::{OutEdge, WordGraph};
