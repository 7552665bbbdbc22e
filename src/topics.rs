//! Category-based topic extraction
//!
//! Buckets text words into a fixed catalog of named categories by loose
//! vocabulary matching, ranks categories by hit count, and backfills with a
//! catch-all "General" category. Never returns an empty list: the worst case
//! is a single placeholder topic.

use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::stopwords::Stopwords;
use crate::nlp::tokenize;
use crate::types::{Extraction, Topic};

/// Minimum word length for a token to participate in topic matching.
const MIN_WORD_LEN: usize = 3;

/// A named category with its static vocabulary.
#[derive(Debug, Clone)]
pub struct TopicCategory {
    pub name: String,
    pub terms: Vec<String>,
}

impl TopicCategory {
    pub fn new(name: impl Into<String>, terms: &[&str]) -> Self {
        Self {
            name: name.into(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Loose match: the word equals a category term or contains one as a
    /// substring ("blockchains" matches "blockchain").
    fn matches(&self, word: &str) -> bool {
        self.terms
            .iter()
            .any(|term| word == term || word.contains(term.as_str()))
    }
}

/// The immutable category catalog, loaded once and passed into the
/// extractor rather than held as global state.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    categories: Vec<TopicCategory>,
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                TopicCategory::new(
                    "Technology",
                    &[
                        "blockchain", "technology", "decentralized", "systems", "data",
                        "topology", "infrastructure", "pki", "security", "network",
                        "algorithm", "software", "hardware", "platform", "application",
                        "digital", "computer", "internet", "cloud", "api", "interface",
                        "protocol", "encryption", "authentication", "distributed",
                    ],
                ),
                TopicCategory::new(
                    "Education",
                    &[
                        "college", "university", "degree", "education", "cgpa", "gpa",
                        "school", "academic", "course", "study", "student", "professor",
                        "learning", "curriculum", "semester", "grade", "graduation",
                        "bachelor", "master", "phd", "thesis", "research", "assignment",
                    ],
                ),
                TopicCategory::new(
                    "Skills",
                    &[
                        "python", "java", "javascript", "html", "css", "programming",
                        "development", "coding", "framework", "library", "database",
                        "sql", "frontend", "backend", "fullstack", "devops", "docker",
                        "kubernetes", "git", "agile",
                    ],
                ),
                TopicCategory::new(
                    "Business",
                    &[
                        "business", "company", "organization", "management", "strategy",
                        "marketing", "sales", "customer", "client", "product", "service",
                        "market", "industry", "revenue", "profit", "growth", "startup",
                        "enterprise", "finance", "investment", "budget", "roi",
                    ],
                ),
            ],
        }
    }
}

impl TopicCatalog {
    pub fn new(categories: Vec<TopicCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[TopicCategory] {
        &self.categories
    }
}

/// Category-catalog topic extractor.
#[derive(Debug)]
pub struct TopicExtractor {
    stopwords: Stopwords,
    catalog: TopicCatalog,
    num_topics: usize,
    num_terms: usize,
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicExtractor {
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::default(),
            catalog: TopicCatalog::default(),
            num_topics: 3,
            num_terms: 10,
        }
    }

    pub fn with_catalog(mut self, catalog: TopicCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Maximum number of topics to return.
    pub fn with_num_topics(mut self, n: usize) -> Self {
        self.num_topics = n.max(1);
        self
    }

    /// Maximum number of terms carried by each topic.
    pub fn with_num_terms(mut self, n: usize) -> Self {
        self.num_terms = n.max(1);
        self
    }

    /// Extract up to `num_topics` topics from cleaned text.
    ///
    /// Categories are ranked by how many distinct text-word hits they
    /// collect; a "General" topic built from the most frequent unmatched
    /// words fills in when fewer categories match than requested. The result
    /// is never empty.
    pub fn extract(&self, text: &str) -> Extraction<Vec<Topic>> {
        let word_counts = self.count_content_words(text);
        if word_counts.is_empty() {
            warn!("no topic candidates in input; returning placeholder topic");
            return Extraction::Placeholder(vec![placeholder_topic()]);
        }

        // Deterministic word ordering: frequency desc, then alphabetical.
        let mut ranked_words: Vec<(&str, usize)> = word_counts
            .iter()
            .map(|(w, &c)| (w.as_str(), c))
            .collect();
        ranked_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        // Collect per-category matches.
        let mut matched: Vec<(usize, Vec<&str>)> = Vec::new();
        for (cat_idx, category) in self.catalog.categories().iter().enumerate() {
            let hits: Vec<&str> = ranked_words
                .iter()
                .filter(|(word, _)| category.matches(word))
                .map(|(word, _)| *word)
                .collect();
            if !hits.is_empty() {
                matched.push((cat_idx, hits));
            }
        }

        // Rank categories by hit count; equal counts keep catalog order.
        matched.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));

        let mut topics: Vec<Topic> = matched
            .into_iter()
            .take(self.num_topics)
            .map(|(cat_idx, hits)| {
                Topic::new(
                    self.catalog.categories()[cat_idx].name.clone(),
                    hits.into_iter()
                        .take(self.num_terms)
                        .map(str::to_string)
                        .collect(),
                )
            })
            .collect();

        // Backfill with a catch-all built from the leftover vocabulary.
        if topics.len() < self.num_topics {
            let used: FxHashSet<&str> = topics
                .iter()
                .flat_map(|t| t.terms.iter().map(String::as_str))
                .collect();
            let leftovers: Vec<String> = ranked_words
                .iter()
                .filter(|(word, _)| !used.contains(word))
                .take(self.num_terms)
                .map(|(word, _)| word.to_string())
                .collect();
            if !leftovers.is_empty() {
                topics.push(Topic::new("General", leftovers));
            }
        }

        if topics.is_empty() {
            return Extraction::Placeholder(vec![placeholder_topic()]);
        }
        Extraction::Extracted(topics)
    }

    fn count_content_words(&self, text: &str) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for token in tokenize::words(text) {
            if token.chars().count() >= MIN_WORD_LEN && !self.stopwords.contains(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        counts
    }
}

fn placeholder_topic() -> Topic {
    Topic::new(
        "Main Topic",
        vec![
            "no".to_string(),
            "significant".to_string(),
            "topics".to_string(),
            "found".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technology_text_hits_technology_category() {
        let text = "Blockchain networks rely on distributed consensus protocols. \
            Encryption and authentication secure the network infrastructure.";
        let topics = TopicExtractor::new().extract(text).into_inner();

        assert_eq!(topics[0].topic, "Technology");
        assert!(topics[0].terms.iter().any(|t| t.contains("blockchain")));
    }

    #[test]
    fn test_loose_substring_matching() {
        // "blockchains" is not a catalog term but contains "blockchain".
        let topics = TopicExtractor::new()
            .extract("Blockchains everywhere, blockchains forever, blockchains win.")
            .into_inner();
        assert_eq!(topics[0].topic, "Technology");
        assert_eq!(topics[0].terms, vec!["blockchains"]);
    }

    #[test]
    fn test_general_backfill_for_uncategorized_text() {
        let text = "Penguins waddle across frozen antarctic landscapes hunting krill.";
        let topics = TopicExtractor::new().extract(text).into_inner();

        assert!(topics.iter().any(|t| t.topic == "General"));
        let general = topics.iter().find(|t| t.topic == "General").unwrap();
        assert!(general.terms.iter().any(|t| t == "penguins"));
    }

    #[test]
    fn test_never_empty_worst_case_placeholder() {
        let result = TopicExtractor::new().extract("");
        assert!(result.is_placeholder());
        let topics = result.into_inner();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic, "Main Topic");
    }

    #[test]
    fn test_num_topics_limit() {
        let text = "Python programming at a startup company. University research \
            on blockchain networks. Marketing strategy for the product.";
        let topics = TopicExtractor::new()
            .with_num_topics(2)
            .extract(text)
            .into_inner();
        assert!(topics.len() <= 2);
        assert!(!topics.is_empty());
    }

    #[test]
    fn test_terms_are_ranked_by_frequency() {
        let text = "network network network encryption security security";
        let topics = TopicExtractor::new().extract(text).into_inner();
        assert_eq!(topics[0].terms[0], "network");
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = TopicCatalog::new(vec![TopicCategory::new(
            "Wildlife",
            &["penguin", "krill", "antarctic"],
        )]);
        let topics = TopicExtractor::new()
            .with_catalog(catalog)
            .extract("Penguins hunt krill in antarctic waters.")
            .into_inner();
        assert_eq!(topics[0].topic, "Wildlife");
    }
}
