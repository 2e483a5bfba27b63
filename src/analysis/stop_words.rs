//! Validated stop-word set.

use ahash::AHashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{FalxError, Result};

/// An immutable collection of words filtered out of documents and queries.
///
/// Empty candidate strings are silently dropped and duplicates collapse.
/// Every retained word is validated once at construction; a word containing
/// a control character fails the whole construction with `InvalidArgument`.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Build a stop-word set from a collection of candidate words.
    pub fn new<I, S>(candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = AHashSet::new();
        for candidate in candidates {
            let word = candidate.into();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(&word) {
                return Err(FalxError::invalid_argument(format!(
                    "Stop word {word:?} contains a control character"
                )));
            }
            words.insert(word);
        }

        Ok(StopWordSet { words })
    }

    /// Build a stop-word set from a whitespace-separated string.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    /// Build an empty stop-word set.
    pub fn empty() -> Self {
        StopWordSet::default()
    }

    /// Check whether a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
