//! Raw query text → plus-word and minus-word sets.

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{FalxError, Result};

/// A parsed keyword query.
///
/// Plus words must be present in a matching document; minus words must be
/// absent. Stop words are removed from both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Words required to be present.
    pub plus_words: Vec<String>,

    /// Words required to be absent, leading `-` stripped.
    pub minus_words: Vec<String>,
}

/// One classified query token.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryWord {
    word: String,
    is_minus: bool,
    is_stop: bool,
}

impl ParsedQuery {
    /// Parse raw query text.
    ///
    /// A token beginning with `-` is a minus word with the `-` stripped.
    /// Fails with `InvalidArgument` on a bare `-`, a doubled `--word`, or a
    /// token containing control characters.
    ///
    /// With `dedupe` set, both word lists are sorted lexicographically and
    /// deduplicated, which makes parallel fan-out over them reproducible.
    /// Callers that dedupe their output themselves may skip it.
    pub fn parse(raw: &str, stop_words: &StopWordSet, dedupe: bool) -> Result<Self> {
        let mut query = ParsedQuery::default();

        for token in split_into_words(raw) {
            let query_word = parse_query_word(token, stop_words)?;
            if query_word.is_stop {
                continue;
            }
            if query_word.is_minus {
                query.minus_words.push(query_word.word);
            } else {
                query.plus_words.push(query_word.word);
            }
        }

        if dedupe {
            query.plus_words.sort_unstable();
            query.plus_words.dedup();
            query.minus_words.sort_unstable();
            query.minus_words.dedup();
        }

        Ok(query)
    }

    /// Check whether the query has no surviving words at all.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

fn parse_query_word(token: &str, stop_words: &StopWordSet) -> Result<QueryWord> {
    let (word, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
        return Err(FalxError::invalid_argument(format!(
            "Query word {token:?} is invalid"
        )));
    }

    Ok(QueryWord {
        word: word.to_string(),
        is_minus,
        is_stop: stop_words.contains(word),
    })
}
