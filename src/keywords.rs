//! Frequency-based keyword extraction
//!
//! Counts single words and contiguous 2-3 word phrases, prefers phrases for
//! roughly half the requested slots, and normalizes scores so the top entry
//! is 1.0. Best-effort: degenerate input yields a fixed placeholder list,
//! never an error.

use log::warn;
use rustc_hash::FxHashMap;

use crate::nlp::stopwords::Stopwords;
use crate::nlp::tokenize;
use crate::types::{Extraction, Keyword};

/// Minimum word length for a token to count as a keyword candidate.
const MIN_WORD_LEN: usize = 3;

/// Frequency-based keyword extractor.
#[derive(Debug)]
pub struct KeywordExtractor {
    stopwords: Stopwords,
    num_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::default(),
            num_keywords: 20,
        }
    }

    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set how many keyword entries to return.
    pub fn with_num_keywords(mut self, n: usize) -> Self {
        self.num_keywords = n.max(1);
        self
    }

    /// Extract ranked keywords from cleaned text.
    ///
    /// Roughly half the slots go to the most frequent phrases, the rest to
    /// the most frequent single words. The returned list is sorted phrases
    /// first, then words, each block by descending score; the maximum score
    /// is always 1.0 when the list is non-empty.
    pub fn extract(&self, text: &str) -> Extraction<Vec<Keyword>> {
        let tokens = tokenize::words(text);

        let word_counts = self.count_words(&tokens);
        let phrase_counts = self.count_phrases(&tokens);

        if word_counts.is_empty() && phrase_counts.is_empty() {
            warn!("no keyword candidates in input; returning placeholder");
            return Extraction::Placeholder(placeholder_keywords());
        }

        let mut entries: Vec<Keyword> = Vec::with_capacity(self.num_keywords);

        // Phrases are more informative, so they get the first half of the
        // slots; counts are scaled by the number of distinct terms in their
        // own frequency table before the global max-normalization.
        let distinct_phrases = phrase_counts.len().max(1) as f64;
        for (phrase, count) in top_n(phrase_counts, self.num_keywords / 2) {
            entries.push(Keyword::new(phrase, count as f64 / distinct_phrases));
        }

        let distinct_words = word_counts.len().max(1) as f64;
        let remaining = self.num_keywords - entries.len();
        for (word, count) in top_n(word_counts, remaining) {
            entries.push(Keyword::new(word, count as f64 / distinct_words));
        }

        let max_score = entries
            .iter()
            .map(|k| k.score)
            .fold(f64::MIN, f64::max)
            .max(f64::MIN_POSITIVE);
        for entry in &mut entries {
            entry.score /= max_score;
        }

        Extraction::Extracted(entries)
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LEN && !self.stopwords.contains(word)
    }

    fn count_words(&self, tokens: &[String]) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for token in tokens {
            if self.is_candidate(token) {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Count contiguous 2- and 3-word phrases whose every word is a
    /// candidate (no stopwords, no short words).
    fn count_phrases(&self, tokens: &[String]) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for len in [2usize, 3] {
            for window in tokens.windows(len) {
                if window.iter().all(|w| self.is_candidate(w)) {
                    let phrase = window.join(" ");
                    *counts.entry(phrase).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

/// Most frequent `n` entries; ties break alphabetically so results are
/// deterministic across hash orderings.
fn top_n(counts: FxHashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

fn placeholder_keywords() -> Vec<Keyword> {
    vec![
        Keyword::new("extraction", 1.0),
        Keyword::new("failed", 0.8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Blockchain technology secures distributed ledgers. \
        Blockchain technology relies on consensus. Distributed consensus \
        protects the blockchain network from tampering.";

    #[test]
    fn test_top_score_is_normalized_to_one() {
        let keywords = KeywordExtractor::new().extract(TEXT).into_inner();
        assert!(!keywords.is_empty());
        let max = keywords.iter().map(|k| k.score).fold(f64::MIN, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_phrases_preferred_for_first_slots() {
        let keywords = KeywordExtractor::new().extract(TEXT).into_inner();
        // "blockchain technology" appears twice and should lead the phrase block.
        assert_eq!(keywords[0].term, "blockchain technology");
    }

    #[test]
    fn test_stopwords_and_short_words_excluded() {
        let keywords = KeywordExtractor::new().extract(TEXT).into_inner();
        for kw in &keywords {
            for word in kw.term.split(' ') {
                assert!(word.chars().count() >= 3, "short word leaked: {}", kw.term);
                assert_ne!(word, "the");
            }
        }
    }

    #[test]
    fn test_num_keywords_respected() {
        let keywords = KeywordExtractor::new()
            .with_num_keywords(4)
            .extract(TEXT)
            .into_inner();
        assert!(keywords.len() <= 4);
    }

    #[test]
    fn test_degenerate_input_gives_placeholder() {
        let result = KeywordExtractor::new().extract("a of an it");
        assert!(result.is_placeholder());
        let keywords = result.into_inner();
        assert_eq!(keywords[0].term, "extraction");
        assert!((keywords[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_gives_placeholder() {
        assert!(KeywordExtractor::new().extract("").is_placeholder());
    }

    #[test]
    fn test_deterministic_over_repeated_runs() {
        let extractor = KeywordExtractor::new();
        let a = extractor.extract(TEXT).into_inner();
        let b = extractor.extract(TEXT).into_inner();
        assert_eq!(a, b);
    }
}
