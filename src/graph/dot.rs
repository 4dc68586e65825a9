//! Graphviz DOT rendering
//!
//! Pure string construction: the caller decides where the artifact goes and
//! whether to invoke a renderer. An optional highlighted path (an ordered
//! list of words) marks its edges red; words or edges missing from the graph
//! are silently skipped.

use super::word_graph::WordGraph;
use rustc_hash::FxHashSet;
use std::fmt::Write;

/// Render the graph as a DOT `digraph`, optionally highlighting a path.
pub fn to_dot<S: AsRef<str>>(graph: &WordGraph, highlight: Option<&[S]>) -> String {
    let mut dot = String::new();
    dot.push_str("digraph WordGraph {\n");
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    node [shape=ellipse, style=filled, fillcolor=white];\n");
    dot.push_str("    edge [fontsize=12];\n\n");

    for word in graph.words() {
        let _ = writeln!(dot, "    \"{word}\";");
    }
    dot.push('\n');

    let mut highlighted: FxHashSet<(u32, u32)> = FxHashSet::default();
    if let Some(path) = highlight {
        for pair in path.windows(2) {
            if let (Some(a), Some(b)) = (
                graph.node_id(pair[0].as_ref()),
                graph.node_id(pair[1].as_ref()),
            ) {
                highlighted.insert((a, b));
            }
        }
    }

    for id in 0..graph.node_count() as u32 {
        let Some(source) = graph.word(id) else {
            continue;
        };
        for edge in graph.out_edges(id) {
            let Some(target) = graph.word(edge.target) else {
                continue;
            };
            if highlighted.contains(&(id, edge.target)) {
                let _ = writeln!(
                    dot,
                    "    \"{source}\" -> \"{target}\" [label=\"{}\", color=red, penwidth=2.0];",
                    edge.weight
                );
            } else {
                let _ = writeln!(
                    dot,
                    "    \"{source}\" -> \"{target}\" [label=\"{}\"];",
                    edge.weight
                );
            }
        }
    }

    dot.push_str("}\n");
    dot
}
