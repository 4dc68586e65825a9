//! Bridge-word discovery
//!
//! A bridge word between `w1` and `w2` is any node `b` with edges
//! `w1 -> b` and `b -> w2`. Candidates are enumerated in the insertion order
//! of `w1`'s out-adjacency, so the result list is reproducible given the same
//! build order.

use crate::graph::WordGraph;
use serde::Serialize;

/// Outcome of a bridge-word query.
///
/// Callers decide how to phrase each case; the word list, not its prose
/// rendering, is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeWords {
    /// Neither queried word is a node.
    NeitherInGraph,
    /// Exactly one queried word is absent; carries the missing word.
    /// The first word is checked first.
    MissingWord(String),
    /// Both words are present but no node bridges them.
    NoBridges,
    /// Bridge words in out-adjacency insertion order.
    Found(Vec<String>),
}

/// Find all bridge words from `word1` to `word2`.
///
/// Both inputs are lower-cased before lookup.
pub fn bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeWords {
    let w1 = word1.to_lowercase();
    let w2 = word2.to_lowercase();

    match (graph.node_id(&w1), graph.node_id(&w2)) {
        (None, None) => BridgeWords::NeitherInGraph,
        (None, Some(_)) => BridgeWords::MissingWord(w1),
        (Some(_), None) => BridgeWords::MissingWord(w2),
        (Some(a), Some(b)) => {
            let found: Vec<String> = candidates_between(graph, a, b)
                .into_iter()
                .filter_map(|id| graph.word(id).map(str::to_string))
                .collect();
            if found.is_empty() {
                BridgeWords::NoBridges
            } else {
                BridgeWords::Found(found)
            }
        }
    }
}

/// Bridge candidate ids between two nodes, in out-adjacency insertion order.
///
/// Shared with text generation, which draws uniformly from this list.
pub(crate) fn candidates_between(graph: &WordGraph, w1: u32, w2: u32) -> Vec<u32> {
    graph
        .out_edges(w1)
        .iter()
        .filter(|e| graph.out_edges(e.target).iter().any(|e2| e2.target == w2))
        .map(|e| e.target)
        .collect()
}
