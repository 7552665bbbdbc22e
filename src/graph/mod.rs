//! Sentence-similarity graph construction
//!
//! This module builds the dense weighted graph that rank propagation runs
//! over: one node per sentence, edge weight = cosine similarity of the two
//! sentences' stopword-filtered term-count vectors.

pub mod similarity;

pub use similarity::{SimilarityGraphBuilder, SimilarityMatrix};
