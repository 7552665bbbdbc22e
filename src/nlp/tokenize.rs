//! Word tokenization
//!
//! Lowercases and splits text into word tokens, treating every non-word
//! character as a separator. This is deliberately simple: similarity and
//! frequency statistics only need bag-of-words tokens, not offsets or POS.

/// Tokenize text into lowercase word tokens.
///
/// A word is a maximal run of alphanumeric characters (Unicode-aware) plus
/// underscores; everything else separates tokens.
pub fn words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            for lc in c.to_lowercase() {
                current.push(lc);
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            words("Machine learning is fun."),
            vec!["machine", "learning", "is", "fun"]
        );
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(
            words("state-of-the-art (really)"),
            vec!["state", "of", "the", "art", "really"]
        );
    }

    #[test]
    fn test_digits_and_underscores_kept() {
        assert_eq!(words("v2_beta rollout"), vec!["v2_beta", "rollout"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert!(words("").is_empty());
        assert!(words("!!! --- ???").is_empty());
    }

    #[test]
    fn test_unicode_lowercasing() {
        assert_eq!(words("Überraschung Groß"), vec!["überraschung", "groß"]);
    }
}
