//! Random walk
//!
//! Starts at a uniformly random node and follows outgoing edges, choosing
//! uniformly among distinct targets (weights play no role). The walk ends at
//! a dead end, or immediately after re-crossing a directed edge it has
//! already traversed — the repeat target is still appended. Termination is
//! therefore bounded by the number of distinct edges.

use crate::graph::WordGraph;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Outcome of a random walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkOutcome {
    /// The graph has no nodes to start from.
    EmptyGraph,
    /// Visited node sequence, including the repeat that ended the walk.
    Path(Vec<String>),
}

/// Walk the graph from a random start node.
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> WalkOutcome {
    let n = graph.node_count();
    if n == 0 {
        return WalkOutcome::EmptyGraph;
    }

    let mut current = rng.random_range(0..n) as u32;
    let mut path = Vec::new();
    if let Some(word) = graph.word(current) {
        path.push(word.to_string());
    }

    let mut traversed: FxHashSet<(u32, u32)> = FxHashSet::default();
    loop {
        let edges = graph.out_edges(current);
        if edges.is_empty() {
            break; // dead end
        }
        let next = edges[rng.random_range(0..edges.len())].target;
        if let Some(word) = graph.word(next) {
            path.push(word.to_string());
        }
        if !traversed.insert((current, next)) {
            break; // repeated edge ends the walk right after crossing it
        }
        current = next;
    }

    WalkOutcome::Path(path)
}
