//! Integration tests for wordgraph

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgraph::*;

/// Fixed sample text shared by these tests
const SAMPLE_TEXT: &str = "The scientist carefully analyzed the data, wrote a detailed \
     report, and shared the report with the team, but the team requested more data, so the \
     scientist analyzed it again.";

fn sample_graph() -> WordGraph {
    WordGraph::from_text(SAMPLE_TEXT)
}

#[test]
fn test_edge_weights_count_pair_occurrences() {
    let graph = sample_graph();

    assert_eq!(graph.edge_weight("the", "scientist"), Some(2));
    assert_eq!(graph.edge_weight("the", "team"), Some(2));
    assert_eq!(graph.edge_weight("the", "data"), Some(1));
    assert_eq!(graph.edge_weight("the", "report"), Some(1));
    assert_eq!(graph.edge_weight("scientist", "carefully"), Some(1));
    // No such consecutive pair in the text.
    assert_eq!(graph.edge_weight("scientist", "the"), None);
}

#[test]
fn test_rebuild_is_idempotent() {
    let first = sample_graph();
    let second = sample_graph();

    assert_eq!(first.node_count(), second.node_count());
    assert_eq!(first.edge_count(), second.edge_count());
    let words: Vec<&str> = first.words().collect();
    assert_eq!(words, second.words().collect::<Vec<_>>());
    for source in first.words() {
        for target in first.words() {
            assert_eq!(
                first.edge_weight(source, target),
                second.edge_weight(source, target),
                "{source} -> {target}"
            );
        }
    }
}

#[test]
fn test_bridge_words_on_sample_text() {
    let graph = sample_graph();

    assert_eq!(
        bridge_words(&graph, "the", "carefully"),
        BridgeWords::Found(vec!["scientist".to_string()])
    );
    assert_eq!(
        bridge_words(&graph, "analyzed", "scientist"),
        BridgeWords::Found(vec!["the".to_string()])
    );
    assert_eq!(
        bridge_words(&graph, "hello", "world"),
        BridgeWords::NeitherInGraph
    );
    assert_eq!(
        bridge_words(&graph, "hello", "the"),
        BridgeWords::MissingWord("hello".to_string())
    );
    // Both present, nothing bridging them.
    assert_eq!(bridge_words(&graph, "the", "the"), BridgeWords::NoBridges);
}

#[test]
fn test_shortest_path_on_sample_text() {
    let graph = sample_graph();

    assert_eq!(
        shortest_path(&graph, "the", "scientist"),
        PathOutcome::Found {
            path: vec!["the".to_string(), "scientist".to_string()],
            length: 1
        }
    );
    assert_eq!(
        shortest_path(&graph, "hello", "scientist"),
        PathOutcome::NotFound("hello".to_string())
    );
    // "again" has no outgoing edges.
    assert_eq!(
        shortest_path(&graph, "again", "scientist"),
        PathOutcome::NoPath
    );
    assert_eq!(
        shortest_path(&graph, "the", "the"),
        PathOutcome::SameWord("the".to_string())
    );
}

#[test]
fn test_page_rank_on_sample_text() {
    let graph = sample_graph();
    let config = RankConfig::default();

    let scores = page_rank_scores(&graph, &config);
    assert_eq!(scores.len(), graph.node_count());
    let sum: f64 = scores.iter().sum();
    assert!((sum - 1.0).abs() < 1e-4, "scores sum to {sum}");

    assert!(page_rank(&graph, "the", &config).is_some());
    assert_eq!(page_rank(&graph, "hello", &config), None);
}

#[test]
fn test_random_walk_on_sample_text() {
    let graph = sample_graph();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let WalkOutcome::Path(path) = random_walk(&graph, &mut rng) else {
            panic!("sample graph is not empty");
        };
        assert!(!path.is_empty());
        assert!(path.len() <= graph.edge_count() + 2);
        for word in &path {
            assert!(graph.contains(word), "unknown word {word:?} in walk");
        }
    }
}

#[test]
fn test_generate_uses_sample_bridges() {
    let graph = sample_graph();
    let mut rng = StdRng::seed_from_u64(0);

    // "scientist" is the only bridge between "the" and "carefully".
    assert_eq!(
        generate_text(&graph, &mut rng, "the carefully"),
        "the scientist carefully"
    );
    // Unknown words stay untouched.
    assert_eq!(
        generate_text(&graph, &mut rng, "totally unknown words"),
        "totally unknown words"
    );
}

#[test]
fn test_dot_renders_the_highlighted_path() {
    let graph = sample_graph();

    let outcome = shortest_path(&graph, "the", "scientist");
    let PathOutcome::Found { path, .. } = outcome else {
        panic!("expected a path");
    };
    let dot = to_dot(&graph, Some(&path));
    assert!(dot.contains("\"the\" -> \"scientist\" [label=\"2\", color=red, penwidth=2.0];"));
}

#[test]
fn test_empty_and_degenerate_inputs() {
    let empty = WordGraph::from_text("");
    assert!(empty.is_empty());
    assert_eq!(empty.edge_count(), 0);

    let single = WordGraph::from_text("word");
    assert!(single.is_empty());

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(random_walk(&empty, &mut rng), WalkOutcome::EmptyGraph);
    assert!(page_rank_scores(&empty, &RankConfig::default()).is_empty());
}
