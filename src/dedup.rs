//! Exact-duplicate document detection and removal.
//!
//! Built entirely on the engine's public read/remove interface: ascending id
//! enumeration, per-document word frequencies, and whole-document removal.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::document::DocumentId;
use crate::search::engine::SearchEngine;

/// Remove every exact duplicate document from the engine.
///
/// Two documents are duplicates when their word sets are equal, term
/// frequencies ignored. Ids are scanned in ascending order, so the smallest
/// id of each duplicate group survives. Returns the removed ids in ascending
/// order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let mut seen: BTreeSet<Vec<Arc<str>>> = BTreeSet::new();
    let mut duplicates = Vec::new();

    for id in engine.document_ids().collect::<Vec<_>>() {
        // Keys of a BTreeMap come out sorted, so the word list is a
        // canonical signature of the word set.
        let words: Vec<Arc<str>> = engine.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(words) {
            duplicates.push(id);
        }
    }

    for &id in &duplicates {
        engine.remove_document(id);
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analysis::stop_words::StopWordSet;
    use crate::document::DocumentStatus;

    fn add(engine: &mut SearchEngine, id: DocumentId, text: &str) {
        engine
            .add_document(id, text, DocumentStatus::Actual, &[1])
            .unwrap();
    }

    #[test]
    fn test_duplicates_removed_keeping_smallest_id() {
        let mut engine = SearchEngine::new(StopWordSet::from_text("and with").unwrap());

        add(&mut engine, 1, "funny pet and nasty rat");
        add(&mut engine, 2, "funny pet with curly hair");
        // Duplicate of 1: same word set once stop words are gone.
        add(&mut engine, 3, "funny pet and nasty rat");
        // Duplicate of 2: frequencies differ, word set does not.
        add(&mut engine, 4, "funny pet curly hair hair");
        add(&mut engine, 5, "nasty rat");

        let removed = remove_duplicates(&mut engine);

        assert_eq!(removed, vec![3, 4]);
        assert_eq!(engine.document_count(), 3);
        assert!(engine.word_frequencies(3).is_empty());
        assert!(!engine.word_frequencies(2).is_empty());
    }

    #[test]
    fn test_word_order_irrelevant() {
        let mut engine = SearchEngine::new(StopWordSet::empty());

        add(&mut engine, 0, "rat nasty");
        add(&mut engine, 1, "nasty rat");

        let removed = remove_duplicates(&mut engine);

        assert_eq!(removed, vec![1]);
    }

    #[test]
    fn test_no_duplicates_is_noop() {
        let mut engine = SearchEngine::new(StopWordSet::empty());

        add(&mut engine, 0, "white cat");
        add(&mut engine, 1, "black dog");

        assert!(remove_duplicates(&mut engine).is_empty());
        assert_eq!(engine.document_count(), 2);
    }

    #[test]
    fn test_empty_engine() {
        let mut engine = SearchEngine::new(StopWordSet::empty());

        assert!(remove_duplicates(&mut engine).is_empty());
    }
}
