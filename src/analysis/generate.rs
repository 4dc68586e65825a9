//! Text generation via bridge insertion
//!
//! The input is tokenized exactly like graph construction. For every
//! consecutive pair whose words are both nodes, a bridge word (if any) is
//! drawn uniformly at random and spliced between them. The random source is
//! injected, so a seeded generator makes the output reproducible.

use crate::analysis::bridge::candidates_between;
use crate::graph::WordGraph;
use crate::nlp::tokenize;
use rand::Rng;

/// Generate the token sequence with bridges inserted.
///
/// Fewer than two tokens come back unchanged. The output always starts with
/// the first input token, and every following input token appears whether or
/// not a bridge was inserted before it.
pub fn generate_tokens<R: Rng + ?Sized>(
    graph: &WordGraph,
    rng: &mut R,
    text: &str,
) -> Vec<String> {
    let words = tokenize(text);
    if words.len() < 2 {
        return words;
    }

    let mut result = Vec::with_capacity(words.len());
    result.push(words[0].clone());

    for pair in words.windows(2) {
        if let (Some(a), Some(b)) = (graph.node_id(&pair[0]), graph.node_id(&pair[1])) {
            let candidates = candidates_between(graph, a, b);
            if !candidates.is_empty() {
                let pick = candidates[rng.random_range(0..candidates.len())];
                if let Some(bridge) = graph.word(pick) {
                    result.push(bridge.to_string());
                }
            }
        }
        result.push(pair[1].clone());
    }

    result
}

/// [`generate_tokens`] joined with single spaces.
pub fn generate_text<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R, text: &str) -> String {
    generate_tokens(graph, rng, text).join(" ")
}
