//! Shortest paths over edge weights
//!
//! Single-source Dijkstra with lazy deletion: stale heap entries are skipped
//! instead of decreased in place. The heap is keyed on `(distance, node id)`
//! and adjacency is relaxed in insertion order, so equal-weight ties resolve
//! the same way on every run.

use crate::graph::WordGraph;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome {
    /// The carried word is not a node; the first word is checked first.
    NotFound(String),
    /// Source and target are the same node: single-node path, length 0.
    SameWord(String),
    /// A minimum-weight path. `length` is its edge count (node count − 1),
    /// not the summed weight.
    Found { path: Vec<String>, length: usize },
    /// Both words exist but no directed path connects them.
    NoPath,
}

/// Compute a minimum-weight path from `word1` to `word2`.
///
/// Both inputs are lower-cased before lookup. Any path of minimal total
/// weight is acceptable; this implementation is deterministic for a given
/// graph build order.
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> PathOutcome {
    let w1 = word1.to_lowercase();
    let w2 = word2.to_lowercase();

    let Some(source) = graph.node_id(&w1) else {
        return PathOutcome::NotFound(w1);
    };
    let Some(target) = graph.node_id(&w2) else {
        return PathOutcome::NotFound(w2);
    };
    if source == target {
        return PathOutcome::SameWord(w1);
    }

    let n = graph.node_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev: Vec<Option<u32>> = vec![None; n];
    let mut frontier = BinaryHeap::new();

    dist[source as usize] = 0;
    frontier.push(Reverse((0u64, source)));

    while let Some(Reverse((d, node))) = frontier.pop() {
        if node == target {
            return PathOutcome::Found {
                path: reconstruct(graph, &prev, target),
                length: hop_count(&prev, target),
            };
        }
        // Stale entry: a shorter distance was already settled.
        if d > dist[node as usize] {
            continue;
        }
        for edge in graph.out_edges(node) {
            let next = d + u64::from(edge.weight);
            if next < dist[edge.target as usize] {
                dist[edge.target as usize] = next;
                prev[edge.target as usize] = Some(node);
                frontier.push(Reverse((next, edge.target)));
            }
        }
    }

    PathOutcome::NoPath
}

fn reconstruct(graph: &WordGraph, prev: &[Option<u32>], target: u32) -> Vec<String> {
    let mut path = Vec::new();
    let mut cursor = Some(target);
    while let Some(id) = cursor {
        if let Some(word) = graph.word(id) {
            path.push(word.to_string());
        }
        cursor = prev[id as usize];
    }
    path.reverse();
    path
}

fn hop_count(prev: &[Option<u32>], target: u32) -> usize {
    let mut hops = 0;
    let mut cursor = prev[target as usize];
    while let Some(id) = cursor {
        hops += 1;
        cursor = prev[id as usize];
    }
    hops
}
