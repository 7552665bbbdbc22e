//! Rank propagation over the sentence-similarity graph
//!
//! This module provides PageRank-style power iteration on the dense
//! similarity matrix, plus the result type shared with the selector.

pub mod dense;

pub use dense::DensePageRank;

/// Result of a rank propagation run.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// One score per sentence, indexed by original sentence index.
    pub scores: Vec<f64>,
    /// Iterations actually performed.
    pub iterations: usize,
    /// Final L1 delta between the last two iterations.
    pub delta: f64,
    /// Whether the delta dropped below the threshold before the iteration
    /// cap. Non-convergence is not an error; scores are still usable.
    pub converged: bool,
}

impl RankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Indices of the top `k` sentences by score, highest first.
    ///
    /// Ties break toward the lower original index, which keeps selection
    /// deterministic for duplicate or uniformly-scored sentences.
    pub fn top_k(&self, k: usize) -> Vec<usize> {
        let mut indexed: Vec<(usize, f64)> =
            self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        indexed.truncate(k);
        indexed.into_iter().map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_orders_by_score() {
        let result = RankResult::new(vec![0.1, 0.5, 0.3], 10, 1e-6, true);
        assert_eq!(result.top_k(2), vec![1, 2]);
    }

    #[test]
    fn test_top_k_tie_breaks_on_lower_index() {
        let result = RankResult::new(vec![0.25, 0.25, 0.25, 0.25], 1, 0.0, true);
        assert_eq!(result.top_k(2), vec![0, 1]);
    }

    #[test]
    fn test_top_k_clamps_to_len() {
        let result = RankResult::new(vec![0.6, 0.4], 5, 1e-7, true);
        assert_eq!(result.top_k(10), vec![0, 1]);
    }
}
