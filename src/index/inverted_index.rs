//! In-memory inverted index with a co-maintained document store.
//!
//! The index keeps two mirror-consistent maps: word → (document → term
//! frequency) and document → (word → term frequency). Every distinct word is
//! interned as an `Arc<str>` shared by both directions, so a word is stored
//! once no matter how many postings reference it. Document text is owned by
//! the document record for as long as the document is present.
//!
//! The index is not safe for concurrent mutation; `&mut self` on the mutating
//! operations enforces the single-writer discipline at compile time.
//! Concurrent reads are safe with each other.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashSet;
use rayon::prelude::*;

use crate::document::{DocumentId, DocumentStatus};
use crate::error::{FalxError, Result};

static EMPTY_WORD_FREQS: BTreeMap<Arc<str>, f64> = BTreeMap::new();

/// Metadata and text of a stored document.
#[derive(Debug, Clone)]
struct DocumentRecord {
    /// Truncating average of the caller-supplied ratings.
    rating: i32,

    /// Caller-assigned lifecycle status, immutable after insertion.
    status: DocumentStatus,

    /// The document's owned text, dropped only when the document is removed.
    #[allow(dead_code)]
    text: Arc<str>,

    /// Term frequency per surviving word of this document.
    word_freqs: BTreeMap<Arc<str>, f64>,
}

/// An inverted index over short in-memory documents.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// word → (document id → term frequency).
    word_to_documents: BTreeMap<Arc<str>, BTreeMap<DocumentId, f64>>,

    /// document id → record (metadata, text, word → term frequency).
    documents: BTreeMap<DocumentId, DocumentRecord>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Insert a document whose surviving words have already been analyzed.
    ///
    /// `words` is the stop-word-filtered token sequence of `text`, in
    /// document order with repetitions. Term frequency of a word is its
    /// occurrence count divided by `words.len()`, so the frequencies of a
    /// non-empty document sum to 1.0.
    ///
    /// Fails with `InvalidArgument` if `id` is negative or already present.
    /// Nothing is mutated on failure.
    pub fn insert(
        &mut self,
        id: DocumentId,
        text: Arc<str>,
        status: DocumentStatus,
        rating: i32,
        words: &[&str],
    ) -> Result<()> {
        if id < 0 {
            return Err(FalxError::invalid_argument(format!(
                "Document id {id} is negative"
            )));
        }
        if self.documents.contains_key(&id) {
            return Err(FalxError::invalid_argument(format!(
                "Document id {id} is already present"
            )));
        }

        let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
        for &word in words {
            *occurrences.entry(word).or_insert(0) += 1;
        }

        let total = words.len() as f64;
        let mut word_freqs = BTreeMap::new();
        for (word, count) in occurrences {
            let freq = count as f64 / total;
            let interned = self.intern(word);
            self.word_to_documents
                .entry(interned.clone())
                .or_default()
                .insert(id, freq);
            word_freqs.insert(interned, freq);
        }

        self.documents.insert(
            id,
            DocumentRecord {
                rating,
                status,
                text,
                word_freqs,
            },
        );

        Ok(())
    }

    /// Remove a document and every posting referencing it.
    ///
    /// A no-op if `id` is not present. The owned text is dropped after both
    /// map directions have been cleaned, so removal is atomic from the
    /// caller's point of view.
    pub fn remove(&mut self, id: DocumentId) {
        let Some(record) = self.documents.remove(&id) else {
            return;
        };

        for word in record.word_freqs.keys() {
            self.remove_posting(word.as_ref(), id);
        }
    }

    /// Remove a document, fanning the posting cleanup across rayon workers.
    ///
    /// Semantically identical to [`remove`](Self::remove). The words touched
    /// all belong to the single document being removed and `&mut self`
    /// serializes this call against every other mutation, so each word
    /// bucket's own mutation needs no extra synchronization.
    pub fn remove_parallel(&mut self, id: DocumentId) {
        let Some(record) = self.documents.remove(&id) else {
            return;
        };

        // Disjoint get_mut by key is not expressible on a BTreeMap, so the
        // fan-out runs over the entry range and filters to this document's
        // words.
        let doomed: AHashSet<&str> = record.word_freqs.keys().map(|w| w.as_ref()).collect();
        self.word_to_documents
            .par_iter_mut()
            .filter(|(word, _)| doomed.contains(word.as_ref()))
            .for_each(|(_, postings)| {
                postings.remove(&id);
            });

        for word in record.word_freqs.keys() {
            if self
                .word_to_documents
                .get(word.as_ref())
                .is_some_and(|postings| postings.is_empty())
            {
                self.word_to_documents.remove(word.as_ref());
            }
        }
    }

    /// The word → term-frequency mapping of a document.
    ///
    /// Returns an empty mapping if `id` is unknown. Pure read.
    pub fn word_frequencies(&self, id: DocumentId) -> &BTreeMap<Arc<str>, f64> {
        self.documents
            .get(&id)
            .map(|record| &record.word_freqs)
            .unwrap_or(&EMPTY_WORD_FREQS)
    }

    /// Ascending iteration over currently-present document ids.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }

    /// Number of documents currently present.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Check whether a document id is currently present.
    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Status and rating of a document, if present.
    pub fn document_info(&self, id: DocumentId) -> Option<(DocumentStatus, i32)> {
        self.documents
            .get(&id)
            .map(|record| (record.status, record.rating))
    }

    /// The (document id → term frequency) postings of a word, if indexed.
    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.word_to_documents.get(word)
    }

    /// Inverse document frequency of an indexed word.
    ///
    /// Only defined for words with at least one posting, so the denominator
    /// is never zero. Returns `None` for unindexed words.
    pub fn inverse_document_freq(&self, word: &str) -> Option<f64> {
        let postings = self.word_to_documents.get(word)?;
        Some((self.document_count() as f64 / postings.len() as f64).ln())
    }

    /// Intern a word, reusing the allocation of an already-indexed word.
    fn intern(&self, word: &str) -> Arc<str> {
        match self.word_to_documents.get_key_value(word) {
            Some((interned, _)) => interned.clone(),
            None => Arc::from(word),
        }
    }

    /// Drop one posting, pruning the word entry when its postings run out.
    fn remove_posting(&mut self, word: &str, id: DocumentId) {
        if let Some(postings) = self.word_to_documents.get_mut(word) {
            postings.remove(&id);
            if postings.is_empty() {
                self.word_to_documents.remove(word);
            }
        }
    }
}
