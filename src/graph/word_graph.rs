//! Weighted directed word-adjacency graph
//!
//! Nodes are interned words with dense `u32` ids assigned in first-appearance
//! order. Each node keeps its outgoing edges in first-insertion order, which
//! makes bridge-word enumeration and Dijkstra relaxation deterministic across
//! runs, and a list of distinct in-neighbors used by PageRank.
//!
//! The graph is built once from a token sequence and never mutated
//! afterwards; every query takes `&WordGraph`.

use crate::nlp::tokenize;
use rustc_hash::FxHashMap;

/// An outgoing edge: target node id plus accumulated weight.
///
/// The weight is the number of times the source token was immediately
/// followed by the target token in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutEdge {
    /// Target node id
    pub target: u32,
    /// Occurrence count of the ordered pair
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    word: String,
    /// Outgoing edges in first-insertion order.
    out: Vec<OutEdge>,
    /// Distinct in-neighbor ids in first-insertion order.
    incoming: Vec<u32>,
}

/// An immutable word-adjacency graph.
#[derive(Debug, Default)]
pub struct WordGraph {
    /// Maps word -> node id
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by id
    nodes: Vec<NodeData>,
}

impl WordGraph {
    /// Tokenize `text` and build the graph from consecutive token pairs.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    /// Build the graph from an already-tokenized sequence.
    ///
    /// Fewer than two tokens yields an empty graph; that is a degenerate
    /// input, not an error. Empty strings in the sequence never form edges.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::default();
        if tokens.len() < 2 {
            return graph;
        }

        for pair in tokens.windows(2) {
            let (w1, w2) = (pair[0].as_ref(), pair[1].as_ref());
            if w1.is_empty() || w2.is_empty() {
                continue;
            }
            let source = graph.get_or_create_node(w1);
            let target = graph.get_or_create_node(w2);
            graph.record_edge(source, target);
        }

        graph
    }

    fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(NodeData {
            word: word.to_string(),
            ..NodeData::default()
        });
        id
    }

    /// Accumulate one occurrence of the edge `source -> target`.
    ///
    /// The in-neighbor entry is recorded only when the edge is first created,
    /// so `incoming` stays deduplicated regardless of how often the pair
    /// repeats.
    fn record_edge(&mut self, source: u32, target: u32) {
        let out = &mut self.nodes[source as usize].out;
        if let Some(edge) = out.iter_mut().find(|e| e.target == target) {
            edge.weight += 1;
            return;
        }
        out.push(OutEdge { target, weight: 1 });
        self.nodes[target as usize].incoming.push(source);
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.out.len()).sum()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node id by its exact (already lowercase) word.
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Check whether a word is a node.
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// The word for a node id.
    pub fn word(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }

    /// Outgoing edges of a node, in first-insertion order.
    ///
    /// An unknown id yields an empty slice, same as a node with no out-edges.
    pub fn out_edges(&self, id: u32) -> &[OutEdge] {
        self.nodes
            .get(id as usize)
            .map(|n| n.out.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct out-neighbors of a node.
    pub fn out_degree(&self, id: u32) -> usize {
        self.out_edges(id).len()
    }

    /// Distinct in-neighbor ids of a node, in first-insertion order.
    pub fn in_neighbors(&self, id: u32) -> &[u32] {
        self.nodes
            .get(id as usize)
            .map(|n| n.incoming.as_slice())
            .unwrap_or(&[])
    }

    /// Weight of the edge `source -> target`, if it exists.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<u32> {
        let source = self.node_id(source)?;
        let target = self.node_id(target)?;
        self.out_edges(source)
            .iter()
            .find(|e| e.target == target)
            .map(|e| e.weight)
    }

    /// Iterate over all words in node-id (first-appearance) order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.word.as_str())
    }
}
