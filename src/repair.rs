//! Best-effort text repair
//!
//! PDF extraction tends to glue words together and scatter stray
//! whitespace around punctuation. `repair` applies a small set of
//! general-purpose fixes and normalizes spacing. It never fails and makes no
//! promise of removing every artifact; downstream stages must tolerate
//! residual noise.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "dataDecision" -> "data Decision"
    static ref CAMEL_CASE: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    // "end.Next" -> "end. Next" (also after ! and ?)
    static ref GLUED_SENTENCE: Regex = Regex::new(r"([.!?])([A-Za-z])").unwrap();
    // "one,two" -> "one, two"
    static ref GLUED_COMMA: Regex = Regex::new(r",([A-Za-z])").unwrap();
    // Dangling "- ." artifacts from bullet extraction
    static ref DANGLING_HYPHEN: Regex = Regex::new(r"\s+-\s*\.").unwrap();
    // "word ." -> "word."
    static ref SPACE_BEFORE_PERIOD: Regex = Regex::new(r"\s+\.").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    // Keep decimal numbers intact when spacing sentence punctuation.
    static ref DECIMAL_SPLIT: Regex = Regex::new(r"(\d)\.\s+(\d)").unwrap();
}

/// Clean raw extracted text. Best-effort; never fails.
pub fn repair(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = CAMEL_CASE.replace_all(raw, "$1 $2");
    let text = GLUED_SENTENCE.replace_all(&text, "$1 $2");
    let text = GLUED_COMMA.replace_all(&text, ", $1");
    let text = DANGLING_HYPHEN.replace_all(&text, ".");
    let text = SPACE_BEFORE_PERIOD.replace_all(&text, ".");
    let text = DECIMAL_SPLIT.replace_all(&text, "$1.$2");
    let text = MULTI_SPACE.replace_all(&text, " ");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_split() {
        assert_eq!(repair("dataDecision systems"), "data Decision systems");
    }

    #[test]
    fn test_glued_sentences_spaced() {
        assert_eq!(repair("The end.Next starts"), "The end. Next starts");
        assert_eq!(repair("Really?Yes"), "Really? Yes");
    }

    #[test]
    fn test_glued_comma_spaced() {
        assert_eq!(repair("one,two,three"), "one, two, three");
    }

    #[test]
    fn test_space_before_period_removed() {
        assert_eq!(repair("the result ."), "the result.");
    }

    #[test]
    fn test_dangling_hyphen_artifact() {
        assert_eq!(repair("item one - ."), "item one.");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(repair("  too   many\n\nspaces  "), "too many spaces");
    }

    #[test]
    fn test_decimals_preserved() {
        assert_eq!(repair("a score of 8.91 overall"), "a score of 8.91 overall");
        assert_eq!(repair("version 2. 5 shipped"), "version 2.5 shipped");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(repair(""), "");
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let clean = "A perfectly normal sentence. Another one follows.";
        assert_eq!(repair(clean), clean);
    }
}
