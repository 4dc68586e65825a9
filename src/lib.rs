//! # wordgraph
//!
//! Text analysis over a weighted directed word-adjacency graph.
//!
//! A graph is built once from a text: every token is a node, and every
//! consecutive token pair contributes weight 1 to a directed edge. The graph
//! is immutable afterwards, and five read-only queries run over it:
//!
//! - **Bridge words**: single-hop intermediaries between two words
//! - **Text generation**: probabilistic bridge insertion into new text
//! - **Shortest path**: Dijkstra over the edge weights
//! - **PageRank**: damped iterative ranking with sink-mass redistribution
//! - **Random walk**: uniform traversal ending on a repeated edge
//!
//! The library performs no I/O and holds no hidden state; randomness is
//! injected by the caller, so results are reproducible under a seeded
//! generator.
//!
//! ```
//! use wordgraph::{bridge_words, BridgeWords, WordGraph};
//!
//! let graph = WordGraph::from_text("new worlds and new life");
//! let found = bridge_words(&graph, "and", "life");
//! assert_eq!(found, BridgeWords::Found(vec!["new".to_string()]));
//! ```

pub mod analysis;
pub mod errors;
pub mod graph;
pub mod nlp;

// Re-export commonly used items
pub use analysis::bridge::{bridge_words, BridgeWords};
pub use analysis::generate::{generate_text, generate_tokens};
pub use analysis::pagerank::{page_rank, page_rank_scores, RankConfig};
pub use analysis::random_walk::{random_walk, WalkOutcome};
pub use analysis::shortest_path::{shortest_path, PathOutcome};
pub use errors::{Result, WordGraphError};
pub use graph::{to_dot, OutEdge, WordGraph};
pub use nlp::tokenize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
