//! Core data types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A sentence with its original position in the document.
///
/// The index is assigned once by the segmenter and carried through every
/// stage. Selection and reordering always use this index, never a value
/// lookup, so duplicate sentence text cannot confuse ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed.
    pub text: String,
    /// Position in the original document (0-based).
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// Configuration for the extractive summarizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// PageRank damping factor.
    pub damping: f64,
    /// Maximum PageRank iterations before giving up on convergence.
    pub max_iterations: usize,
    /// L1 convergence threshold for PageRank.
    pub convergence_threshold: f64,
    /// Stopword language (passed to the `stop-words` crate).
    pub language: String,
    /// Texts with this many sentences or fewer are returned verbatim;
    /// ranking only adds value above this threshold.
    pub min_ranking_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-5,
            language: "en".to_string(),
            min_ranking_sentences: 3,
        }
    }
}

/// A ranked keyword or keyphrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Single word or contiguous 2-3 word phrase.
    pub term: String,
    /// Normalized score: the top entry always scores 1.0.
    pub score: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// A named topic with its top matching terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub terms: Vec<String>,
}

impl Topic {
    pub fn new(topic: impl Into<String>, terms: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            terms,
        }
    }
}

/// Best-effort extraction result.
///
/// Keyword and topic extraction never fail; degenerate input produces a
/// fixed placeholder instead. Callers that care can distinguish a real
/// (possibly empty-ish) result from the fallback; callers that don't can
/// just take the inner value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "items")]
pub enum Extraction<T> {
    /// Extraction ran to completion on real input.
    Extracted(T),
    /// Input was degenerate; this is a fixed low-confidence fallback.
    Placeholder(T),
}

impl<T> Extraction<T> {
    /// Unwrap to the inner value regardless of provenance.
    pub fn into_inner(self) -> T {
        match self {
            Self::Extracted(v) | Self::Placeholder(v) => v,
        }
    }

    /// Borrow the inner value regardless of provenance.
    pub fn inner(&self) -> &T {
        match self {
            Self::Extracted(v) | Self::Placeholder(v) => v,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_accessors() {
        let real: Extraction<Vec<Keyword>> =
            Extraction::Extracted(vec![Keyword::new("graph", 1.0)]);
        assert!(!real.is_placeholder());
        assert_eq!(real.inner().len(), 1);

        let fallback: Extraction<Vec<Keyword>> =
            Extraction::Placeholder(vec![Keyword::new("extraction", 1.0)]);
        assert!(fallback.is_placeholder());
        assert_eq!(fallback.into_inner()[0].term, "extraction");
    }

    #[test]
    fn test_config_defaults() {
        let cfg = SummarizerConfig::default();
        assert!((cfg.damping - 0.85).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.min_ranking_sentences, 3);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = SummarizerConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, "en");
        assert!((back.convergence_threshold - 1e-5).abs() < 1e-18);
    }
}
