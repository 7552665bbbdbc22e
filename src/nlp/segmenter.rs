//! Sentence segmentation
//!
//! Splits cleaned text into an ordered sequence of sentences. A boundary is
//! a sentence-ending punctuation mark (`.`, `!`, `?`) followed by whitespace
//! and then an uppercase letter. The terminator stays with the sentence it
//! ends.
//!
//! Each sentence carries its original index from the moment it is produced;
//! no later stage re-derives position by searching for the text, so
//! duplicated sentences sort correctly.

use crate::types::Sentence;

/// Split cleaned text into trimmed, indexed sentences.
///
/// Empty fragments are discarded. The returned indices are contiguous from
/// zero and reflect document order.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];
        if matches!(c, '.' | '!' | '?') {
            // Look ahead: whitespace then an uppercase letter means a boundary.
            let mut j = i + 1;
            let mut saw_space = false;
            while j < chars.len() && chars[j].1.is_whitespace() {
                saw_space = true;
                j += 1;
            }
            if saw_space && j < chars.len() && chars[j].1.is_uppercase() {
                let end = pos + c.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<Sentence>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        let index = sentences.len();
        sentences.push(Sentence::new(trimmed, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sents = segment("First sentence. Second sentence. Third one.");
        assert_eq!(
            texts(&sents),
            vec!["First sentence.", "Second sentence.", "Third one."]
        );
    }

    #[test]
    fn test_indices_are_document_order() {
        let sents = segment("Alpha. Beta! Gamma? Delta.");
        let indices: Vec<usize> = sents.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_lowercase_after_period_is_not_a_boundary() {
        // Abbreviation-like pattern: period followed by a lowercase letter.
        let sents = segment("The v2. engine shipped. It works.");
        assert_eq!(
            texts(&sents),
            vec!["The v2. engine shipped.", "It works."]
        );
    }

    #[test]
    fn test_terminator_without_whitespace_is_not_a_boundary() {
        let sents = segment("See section 3.A for details.");
        assert_eq!(sents.len(), 1);
    }

    #[test]
    fn test_exclamation_and_question_boundaries() {
        let sents = segment("Stop! Why? Because.");
        assert_eq!(texts(&sents), vec!["Stop!", "Why?", "Because."]);
    }

    #[test]
    fn test_duplicate_sentences_get_distinct_indices() {
        let sents = segment("Same thing. Same thing. Same thing.");
        assert_eq!(sents.len(), 3);
        assert_eq!(sents[0].text, sents[2].text);
        assert_ne!(sents[0].index, sents[2].index);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sents = segment("Complete sentence. And a trailing fragment");
        assert_eq!(
            texts(&sents),
            vec!["Complete sentence.", "And a trailing fragment"]
        );
    }
}
