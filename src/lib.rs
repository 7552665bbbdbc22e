//! # sumrank
//!
//! Extractive summarization via PageRank over a sentence-similarity graph,
//! plus frequency-based keyword and topic extraction.
//!
//! The pipeline: cleaned text is segmented into indexed sentences, every
//! sentence pair gets a cosine similarity over stopword-filtered term
//! counts, rank propagation scores each sentence, and a retention-ratio
//! budget picks the top sentences back in document order.
//!
//! ```
//! let text = "Graph ranking orders sentences by importance. \
//!     The similarity graph connects related sentences. \
//!     Cats sleep most of the day. \
//!     Sentence ranking uses the similarity graph heavily. \
//!     Importance scores come from iterative propagation.";
//!
//! let summary = sumrank::summarize(text, 0.4).unwrap();
//! assert!(!summary.is_empty());
//!
//! let (keywords, topics) = sumrank::extract_keywords_and_topics(text);
//! assert!(!keywords.inner().is_empty());
//! assert!(!topics.inner().is_empty());
//! ```
//!
//! Keyword and topic extraction are best-effort: degenerate input produces a
//! fixed placeholder wrapped in [`Extraction::Placeholder`], never an error.
//! The summarizer returns `Err` only for an out-of-range retention ratio.

pub mod collab;
pub mod error;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod repair;
pub mod summarizer;
pub mod topics;
pub mod types;

pub use error::{Error, Result};
pub use keywords::KeywordExtractor;
pub use summarizer::Summarizer;
pub use topics::{TopicCatalog, TopicCategory, TopicExtractor};
pub use types::{Extraction, Keyword, Sentence, SummarizerConfig, Topic};

/// Summarize cleaned text with default configuration, keeping roughly
/// `ratio` of its sentences (`ratio` in `(0, 1]`).
pub fn summarize(text: &str, ratio: f64) -> Result<String> {
    Summarizer::new().summarize(text, ratio)
}

/// Extract keywords and topics from cleaned text with default configuration.
///
/// Both halves are independent and best-effort; see [`Extraction`].
pub fn extract_keywords_and_topics(
    text: &str,
) -> (Extraction<Vec<Keyword>>, Extraction<Vec<Topic>>) {
    (
        KeywordExtractor::new().extract(text),
        TopicExtractor::new().extract(text),
    )
}
