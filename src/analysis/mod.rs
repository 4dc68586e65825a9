//! Read-only analytical queries over a built [`WordGraph`](crate::WordGraph)

pub mod bridge;
pub mod generate;
pub mod pagerank;
pub mod random_walk;
pub mod shortest_path;
