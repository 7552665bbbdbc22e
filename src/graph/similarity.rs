//! Dense pairwise sentence-similarity matrix
//!
//! The matrix is symmetric with a zero diagonal. Construction is O(N²) in
//! sentence count, which is fine for document-length inputs; rows are
//! computed in parallel with rayon and assembled deterministically, since
//! each value depends only on sentence content.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::nlp::stopwords::Stopwords;
use crate::nlp::tokenize;
use crate::types::Sentence;

/// An N×N symmetric matrix of non-negative similarity weights.
///
/// `weight(i, i)` is always zero: self-similarity is excluded from ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix for `n` sentences.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Number of sentences (nodes).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between sentences `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Set both `(i, j)` and `(j, i)`, keeping the matrix symmetric.
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        self.values[i * self.n + j] = weight;
        self.values[j * self.n + i] = weight;
    }

    /// Sum of row `i` (total outgoing weight of node `i`).
    pub fn row_sum(&self, i: usize) -> f64 {
        self.values[i * self.n..(i + 1) * self.n].iter().sum()
    }

    /// Iterate over row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

/// Builds a [`SimilarityMatrix`] from indexed sentences.
#[derive(Debug)]
pub struct SimilarityGraphBuilder<'a> {
    stopwords: &'a Stopwords,
}

impl<'a> SimilarityGraphBuilder<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self { stopwords }
    }

    /// Compute the pairwise similarity matrix.
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let n = sentences.len();
        let mut matrix = SimilarityMatrix::zeros(n);
        if n < 2 {
            return matrix;
        }

        // Tokenize and filter each sentence once, up front.
        let filtered: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| {
                let tokens = tokenize::words(&s.text);
                tokens
                    .into_iter()
                    .filter(|t| !self.stopwords.contains(t))
                    .collect()
            })
            .collect();

        // Upper-triangle rows in parallel; each row only reads shared input.
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| cosine_similarity(&filtered[i], &filtered[j]))
                    .collect()
            })
            .collect();

        for (i, row) in rows.into_iter().enumerate() {
            for (offset, weight) in row.into_iter().enumerate() {
                matrix.set_symmetric(i, i + 1 + offset, weight);
            }
        }

        matrix
    }
}

/// Cosine similarity of two token bags over their union vocabulary.
///
/// Equivalent to `1 − cosine_distance` of the term-count vectors. If either
/// bag is empty (for instance a sentence made entirely of stopwords), the
/// similarity is defined as `0.0` rather than an error.
pub fn cosine_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut counts_a: FxHashMap<&str, f64> = FxHashMap::default();
    for token in a {
        *counts_a.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    let mut counts_b: FxHashMap<&str, f64> = FxHashMap::default();
    for token in b {
        *counts_b.entry(token.as_str()).or_insert(0.0) += 1.0;
    }

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(term, &ca)| counts_b.get(term).map(|&cb| ca * cb))
        .sum();

    let norm_a: f64 = counts_a.values().map(|c| c * c).sum::<f64>().sqrt();
    let norm_b: f64 = counts_b.values().map(|c| c * c).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
