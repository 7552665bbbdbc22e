//! Extractive summarization
//!
//! Orchestrates the full pipeline: segmentation, similarity-graph
//! construction, rank propagation, and budgeted selection. All intermediate
//! state is request-scoped; nothing is cached between calls.

pub mod chunker;
pub mod selector;

use log::debug;

use crate::error::{Error, Result};
use crate::graph::SimilarityGraphBuilder;
use crate::nlp::segmenter;
use crate::nlp::stopwords::Stopwords;
use crate::pagerank::{DensePageRank, RankResult};
use crate::types::{Sentence, SummarizerConfig};

/// Extractive summarizer.
///
/// Holds only immutable configuration (stopword set, PageRank parameters),
/// so a single instance can serve any number of sequential requests.
#[derive(Debug)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: Stopwords,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with default configuration (English stopwords,
    /// damping 0.85, threshold 1e-5).
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer with explicit configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let stopwords = Stopwords::for_language(&config.language);
        Self { config, stopwords }
    }

    /// Replace the stopword set (e.g. with a domain-specific list).
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize cleaned text, keeping roughly `ratio` of its sentences.
    ///
    /// Returns `Err` only for an out-of-domain ratio; degenerate text (empty,
    /// or at most [`SummarizerConfig::min_ranking_sentences`] sentences) is
    /// returned verbatim rather than ranked.
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidRatio(ratio));
        }

        let sentences = segmenter::segment(text);
        if sentences.len() <= self.config.min_ranking_sentences {
            debug!(
                "only {} sentences; skipping ranking and returning input",
                sentences.len()
            );
            return Ok(text.to_string());
        }

        let ranks = self.rank_sentences(&sentences);
        let selected = selector::select(&sentences, &ranks, ratio);
        debug!(
            "selected {} of {} sentences (ratio {ratio})",
            selected.len(),
            sentences.len()
        );

        Ok(selector::join(&selected))
    }

    /// Run similarity-graph construction and rank propagation, returning the
    /// per-sentence scores. Exposed for callers that want scores without the
    /// selection step.
    pub fn rank_sentences(&self, sentences: &[Sentence]) -> RankResult {
        let matrix = SimilarityGraphBuilder::new(&self.stopwords).build(sentences);
        DensePageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
            .run(&matrix)
    }
}
