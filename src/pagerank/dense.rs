//! Dense power iteration
//!
//! PageRank over the similarity matrix: rows are normalized to sum to one
//! (zero rows stay zero), scores start uniform at `1/N`, and each step
//! computes `new = (1 − d)/N + d · (Mᵀ · score)`. Iteration stops when the
//! L1 delta drops below the threshold or the cap is reached.

use log::{debug, warn};

use super::RankResult;
use crate::graph::SimilarityMatrix;

/// PageRank runner for dense similarity matrices.
#[derive(Debug, Clone)]
pub struct DensePageRank {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// L1 convergence threshold.
    pub threshold: f64,
}

impl Default for DensePageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-5,
        }
    }
}

impl DensePageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run rank propagation.
    ///
    /// Returns best-effort scores even when convergence wasn't reached, with
    /// `converged = false`.
    pub fn run(&self, matrix: &SimilarityMatrix) -> RankResult {
        let n = matrix.len();
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        // Row-normalize; zero rows (no outgoing weight) stay all-zero.
        let mut normalized = vec![0.0; n * n];
        for i in 0..n {
            let row_sum = matrix.row_sum(i);
            if row_sum > 0.0 {
                for (j, &w) in matrix.row(i).iter().enumerate() {
                    normalized[i * n + j] = w / row_sum;
                }
            }
        }

        let teleport = (1.0 - self.damping) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // new[j] = teleport + d * sum_i normalized[i][j] * scores[i]
            new_scores.fill(teleport);
            for (i, &score) in scores.iter().enumerate() {
                if score == 0.0 {
                    continue;
                }
                let row = &normalized[i * n..(i + 1) * n];
                for (j, &w) in row.iter().enumerate() {
                    if w > 0.0 {
                        new_scores[j] += self.damping * w * score;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let converged = delta <= self.threshold;
        if converged {
            debug!("pagerank converged after {iterations} iterations (delta {delta:.2e})");
        } else {
            warn!(
                "pagerank stopped at iteration cap {} with delta {delta:.2e}; using best-effort scores",
                self.max_iterations
            );
        }

        RankResult::new(scores, iterations, delta, converged)
    }
}
