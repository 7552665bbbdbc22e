//! Stopword filtering
//!
//! Stopword sets are loaded once from the `stop-words` crate and treated as
//! immutable configuration: both the similarity builder and the frequency
//! extractors take an explicit `Stopwords` reference rather than reaching
//! into global state.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// An immutable set of stopwords, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: FxHashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl Stopwords {
    /// Load the stopword list for a language code.
    ///
    /// Unknown codes fall back to English, matching the forgiving behavior
    /// callers expect from a best-effort pipeline.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        let words = get(lang).iter().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    /// Build a set from an explicit word list (used in tests and by callers
    /// with domain-specific vocabularies).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty set (no filtering).
    pub fn none() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Extend the set with additional words.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Check whether a word is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        // Tokens from `tokenize` are already lowercase; only fold case when
        // the input isn't.
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Drop stopwords from a token sequence, preserving order.
    pub fn filter<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !self.contains(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
