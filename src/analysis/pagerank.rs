//! PageRank scoring
//!
//! Damped power iteration over the graph's in-adjacency. Every iteration
//! reads only the previous iteration's frozen score vector, so results do
//! not depend on sweep order. Mass from sink nodes (zero out-degree) is
//! redistributed uniformly each iteration; with the graph's deduplicated
//! in-neighbors the score vector keeps summing to 1.

use crate::errors::{Result, WordGraphError};
use crate::graph::WordGraph;
use serde::{Deserialize, Serialize};

/// Configuration for PageRank scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 norm of the score change
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WordGraphError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(WordGraphError::invalid_config("max_iterations must be > 0"));
        }
        if self.tolerance <= 0.0 {
            return Err(WordGraphError::invalid_config("tolerance must be > 0"));
        }
        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// PageRank score of a single word; `None` when it is not a node.
///
/// The input is lower-cased before lookup.
pub fn page_rank(graph: &WordGraph, word: &str, config: &RankConfig) -> Option<f64> {
    let id = graph.node_id(&word.to_lowercase())?;
    page_rank_scores(graph, config).get(id as usize).copied()
}

/// Full score vector, indexed by node id.
///
/// Scores start at `1/N` and iterate until the L1 change drops below the
/// tolerance or `max_iterations` is reached. Empty graphs yield an empty
/// vector.
pub fn page_rank_scores(graph: &WordGraph, config: &RankConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let d = config.damping;
    let n_f = n as f64;
    let mut scores = vec![1.0 / n_f; n];

    for _ in 0..config.max_iterations {
        let prev = scores.clone();

        let sink_mass: f64 = (0..n)
            .filter(|&i| graph.out_degree(i as u32) == 0)
            .map(|i| prev[i])
            .sum();

        for node in 0..n {
            let mut in_sum = 0.0;
            for &source in graph.in_neighbors(node as u32) {
                let degree = graph.out_degree(source);
                if degree > 0 {
                    in_sum += prev[source as usize] / degree as f64;
                }
            }
            scores[node] = (1.0 - d) / n_f + d * (in_sum + sink_mass / n_f);
        }

        let diff: f64 = scores
            .iter()
            .zip(&prev)
            .map(|(next, old)| (next - old).abs())
            .sum();
        if diff < config.tolerance {
            break;
        }
    }

    scores
}
