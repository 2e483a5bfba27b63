//! The search engine: document ingestion, TF-IDF ranking, word matching.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::{FalxError, Result};
use crate::index::InvertedIndex;
use crate::parallel::{ConcurrentMap, ExecutionPolicy};
use crate::query::ParsedQuery;

/// Tunable constants of a [`SearchEngine`] instance.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of ranked results returned by a query.
    pub max_results: usize,

    /// Relevance scores closer than this are considered tied and broken by
    /// descending rating.
    pub tie_epsilon: f64,

    /// Number of shards in the concurrent accumulator used by the parallel
    /// ranking path.
    pub shard_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: 5,
            tie_epsilon: 1e-6,
            shard_count: num_cpus::get().max(1) * 16,
        }
    }
}

/// An in-memory full-text search engine.
///
/// Documents are immutable once added; only whole-document removal is
/// supported. Ranked queries are scored by TF-IDF with boolean
/// inclusion/exclusion terms. Every ranking and removal operation exists in a
/// sequential and a parallel variant selected per call via
/// [`ExecutionPolicy`]; the two are semantically equivalent.
///
/// Mutation (`add_document`, `remove_document`) takes `&mut self` and is
/// thereby serialized; searches take `&self` and are safe to run
/// concurrently with each other.
#[derive(Debug)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with the default configuration.
    pub fn new(stop_words: StopWordSet) -> Self {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(stop_words: StopWordSet, config: SearchConfig) -> Self {
        SearchEngine {
            stop_words,
            index: InvertedIndex::new(),
            config,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Add a document to the engine.
    ///
    /// The text is tokenized and stop words are dropped; the term frequency
    /// of each surviving word is its occurrence count divided by the
    /// surviving token total. The rating is the truncating average of
    /// `ratings` (0 if empty).
    ///
    /// Fails with `InvalidArgument` if `id` is negative or already present,
    /// or if any surviving token contains a control character. Validation
    /// completes before any shared structure is mutated, so a failed call
    /// leaves the engine exactly as it was.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let owned_text: Arc<str> = Arc::from(text);
        let words = self.split_into_words_no_stop(&owned_text)?;
        let rating = compute_average_rating(ratings);

        self.index
            .insert(id, owned_text.clone(), status, rating, &words)
    }

    /// Remove a document. A no-op if `id` is not present.
    pub fn remove_document(&mut self, id: DocumentId) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, id);
    }

    /// Remove a document with an explicit execution policy.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, id: DocumentId) {
        match policy {
            ExecutionPolicy::Sequential => self.index.remove(id),
            ExecutionPolicy::Parallel => self.index.remove_parallel(id),
        }
    }

    /// Number of documents currently present.
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Ascending iteration over currently-present document ids.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.index.document_ids()
    }

    /// The word → term-frequency mapping of a document; empty if unknown.
    pub fn word_frequencies(&self, id: DocumentId) -> &BTreeMap<Arc<str>, f64> {
        self.index.word_frequencies(id)
    }

    /// Top documents for a query, filtered to `Actual` status, sequential.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents for a query with a status filter, sequential.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_status_and_policy(
            ExecutionPolicy::Sequential,
            raw_query,
            status,
        )
    }

    /// Top documents filtered to `Actual`, with an explicit policy.
    pub fn find_top_documents_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_status_and_policy(policy, raw_query, DocumentStatus::Actual)
    }

    /// Top documents with a status filter and an explicit policy.
    pub fn find_top_documents_with_status_and_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_filtered(policy, raw_query, |_id, document_status, _rating| {
            document_status == status
        })
    }

    /// Top documents for a query under a caller-supplied predicate.
    ///
    /// The predicate sees `(document id, status, rating)` and decides whether
    /// the document may accumulate score at all. Results are sorted by
    /// descending relevance; scores within `tie_epsilon` of each other are
    /// tied and broken by descending rating. At most `max_results` entries
    /// are returned.
    pub fn find_top_documents_filtered<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = ParsedQuery::parse(raw_query, &self.stop_words, true)?;

        let mut matched = match policy {
            ExecutionPolicy::Sequential => self.find_all_documents(&query, &predicate),
            ExecutionPolicy::Parallel => self.find_all_documents_parallel(&query, &predicate),
        };

        let epsilon = self.config.tie_epsilon;
        matched.sort_by(|lhs, rhs| {
            if (lhs.relevance - rhs.relevance).abs() < epsilon {
                rhs.rating.cmp(&lhs.rating)
            } else {
                rhs.relevance
                    .partial_cmp(&lhs.relevance)
                    .unwrap_or(Ordering::Equal)
            }
        });
        matched.truncate(self.config.max_results);

        Ok(matched)
    }

    /// The subset of a query's plus words occurring in one document.
    ///
    /// If any minus word occurs in the document the matched-word list is
    /// forced empty; the status is returned either way. The returned words
    /// are lexicographically sorted clones of the index's interned words.
    ///
    /// Fails with `OutOfRange` if `id` is not present.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<Arc<str>>, DocumentStatus)> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, id)
    }

    /// [`match_document`](Self::match_document) with an explicit policy.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<Arc<str>>, DocumentStatus)> {
        let Some((status, _rating)) = self.index.document_info(id) else {
            return Err(FalxError::out_of_range(format!(
                "Document id {id} is not present"
            )));
        };

        match policy {
            ExecutionPolicy::Sequential => {
                let query = ParsedQuery::parse(raw_query, &self.stop_words, true)?;
                let word_freqs = self.index.word_frequencies(id);

                for word in &query.minus_words {
                    if word_freqs.contains_key(word.as_str()) {
                        return Ok((Vec::new(), status));
                    }
                }

                // Plus words are already sorted and deduplicated by the
                // parser, so the output needs no post-processing.
                let matched = query
                    .plus_words
                    .iter()
                    .filter_map(|word| word_freqs.get_key_value(word.as_str()))
                    .map(|(interned, _)| interned.clone())
                    .collect();

                Ok((matched, status))
            }
            ExecutionPolicy::Parallel => {
                let query = ParsedQuery::parse(raw_query, &self.stop_words, false)?;
                let word_freqs = self.index.word_frequencies(id);

                let excluded = query
                    .minus_words
                    .par_iter()
                    .any(|word| word_freqs.contains_key(word.as_str()));
                if excluded {
                    return Ok((Vec::new(), status));
                }

                let mut matched: Vec<Arc<str>> = query
                    .plus_words
                    .par_iter()
                    .filter_map(|word| word_freqs.get_key_value(word.as_str()))
                    .map(|(interned, _)| interned.clone())
                    .collect();

                matched.sort_unstable();
                matched.dedup();

                Ok((matched, status))
            }
        }
    }

    /// Sequential TF-IDF accumulation and minus-word exclusion.
    fn find_all_documents<P>(&self, query: &ParsedQuery, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let mut scores: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let Some(idf) = self.index.inverse_document_freq(word) else {
                continue;
            };
            for (&doc_id, &term_freq) in postings {
                if let Some((status, rating)) = self.index.document_info(doc_id)
                    && predicate(doc_id, status, rating)
                {
                    *scores.entry(doc_id).or_insert(0.0) += term_freq * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for &doc_id in postings.keys() {
                    scores.remove(&doc_id);
                }
            }
        }

        self.collect_hits(scores)
    }

    /// Parallel variant of [`find_all_documents`](Self::find_all_documents).
    ///
    /// Plus-word accumulation fans out over the deduplicated plus-word list
    /// into the sharded accumulator; the fan-out is joined before any
    /// minus-word erase begins, which upholds the accumulator's two-phase
    /// safety contract.
    fn find_all_documents_parallel<P>(&self, query: &ParsedQuery, predicate: &P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
    {
        let scores: ConcurrentMap<f64> = ConcurrentMap::new(self.config.shard_count);

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else {
                return;
            };
            let Some(idf) = self.index.inverse_document_freq(word) else {
                return;
            };
            for (&doc_id, &term_freq) in postings {
                if let Some((status, rating)) = self.index.document_info(doc_id)
                    && predicate(doc_id, status, rating)
                {
                    scores.accumulate(doc_id, term_freq * idf);
                }
            }
        });

        query.minus_words.par_iter().for_each(|word| {
            if let Some(postings) = self.index.postings(word) {
                for &doc_id in postings.keys() {
                    scores.erase(doc_id);
                }
            }
        });

        self.collect_hits(scores.into_ordered_map())
    }

    /// Turn the surviving accumulated scores into hits, id-ascending.
    fn collect_hits(&self, scores: BTreeMap<DocumentId, f64>) -> Vec<Document> {
        scores
            .into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.index
                    .document_info(doc_id)
                    .map(|(_status, rating)| Document::new(doc_id, relevance, rating))
            })
            .collect()
    }

    /// Tokenize text, validate surviving tokens, and drop stop words.
    fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(FalxError::invalid_argument(format!(
                    "Word {word:?} contains a control character"
                )));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

/// Truncating average of the ratings; 0 if there are none.
fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
