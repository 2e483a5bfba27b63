//! Whitespace tokenization.

/// Split text into maximal non-whitespace substrings, in left-to-right order.
///
/// Leading and trailing whitespace runs are ignored; empty or all-whitespace
/// input yields an empty vector. No validation is performed here.
///
/// # Examples
///
/// ```
/// use falx::analysis::tokenizer::split_into_words;
///
/// assert_eq!(split_into_words("white  cat "), vec!["white", "cat"]);
/// assert!(split_into_words("   ").is_empty());
/// ```
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Check that a word contains no control characters below U+0020.
///
/// Words failing this check are rejected wherever they enter the engine:
/// stop-word construction, document insertion, and query parsing.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| ('\0'..' ').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let words = split_into_words("hello  world\ttest");

        assert_eq!(words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_split_surrounding_spaces() {
        assert_eq!(split_into_words("  one two  "), vec!["one", "two"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("   \t  ").is_empty());
    }

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(split_into_words("c b a"), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_valid_word() {
        assert!(is_valid_word("cat"));
        assert!(is_valid_word("пушистый"));
        assert!(!is_valid_word("ca\u{1}t"));
        assert!(!is_valid_word("\u{1f}"));
    }
}
