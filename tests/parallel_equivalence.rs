//! Sequential and parallel execution must be observably equivalent.

use falx::analysis::stop_words::StopWordSet;
use falx::document::{DocumentId, DocumentStatus};
use falx::error::Result;
use falx::parallel::ExecutionPolicy;
use falx::search::engine::SearchEngine;
use falx::search::process_queries::{process_queries, process_queries_joined};

/// A deterministic corpus large enough to exercise the parallel fan-out.
fn large_engine() -> Result<SearchEngine> {
    let vocabulary = [
        "кот", "пёс", "хвост", "ошейник", "белый", "пушистый", "модный", "ухоженный", "скворец",
        "глаза", "выразительные", "евгений",
    ];

    let stop_words = StopWordSet::from_text("и в на")?;
    let mut engine = SearchEngine::new(stop_words);

    for id in 0..200i64 {
        let mut words = Vec::new();
        for k in 0..8 {
            // Simple deterministic mix so word sets overlap across documents.
            let pick = ((id as usize) * 7 + k * 13) % vocabulary.len();
            words.push(vocabulary[pick]);
        }
        let text = words.join(" ");
        let ratings = [(id % 10 - 5) as i32, (id % 7) as i32];
        engine.add_document(id, &text, DocumentStatus::Actual, &ratings)?;
    }

    Ok(engine)
}

#[test]
fn test_find_top_documents_equivalence() -> Result<()> {
    let engine = large_engine()?;

    let queries = [
        "пушистый ухоженный кот",
        "кот -пёс",
        "белый модный -ошейник хвост",
        "скворец евгений -глаза",
        "отсутствующее слово",
    ];

    for raw in queries {
        let sequential = engine.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw)?;
        let parallel = engine.find_top_documents_with_policy(ExecutionPolicy::Parallel, raw)?;

        let sequential_ids: Vec<DocumentId> = sequential.iter().map(|hit| hit.id).collect();
        let parallel_ids: Vec<DocumentId> = parallel.iter().map(|hit| hit.id).collect();
        assert_eq!(sequential_ids, parallel_ids, "query {raw:?}");

        for (s, p) in sequential.iter().zip(&parallel) {
            assert!(
                (s.relevance - p.relevance).abs() < 1e-6,
                "query {raw:?} id {} diverged: {} vs {}",
                s.id,
                s.relevance,
                p.relevance
            );
            assert_eq!(s.rating, p.rating);
        }
    }

    Ok(())
}

#[test]
fn test_match_document_equivalence() -> Result<()> {
    let engine = large_engine()?;

    for id in [0, 17, 63, 141] {
        let sequential =
            engine.match_document_with_policy(ExecutionPolicy::Sequential, "пушистый кот -евгений", id)?;
        let parallel =
            engine.match_document_with_policy(ExecutionPolicy::Parallel, "пушистый кот -евгений", id)?;

        assert_eq!(sequential, parallel, "document {id}");
    }

    Ok(())
}

#[test]
fn test_parallel_removal_equivalence() -> Result<()> {
    let mut sequential = large_engine()?;
    let mut parallel = large_engine()?;

    for id in [3, 77, 123, 199, 123] {
        sequential.remove_document_with_policy(ExecutionPolicy::Sequential, id);
        parallel.remove_document_with_policy(ExecutionPolicy::Parallel, id);
    }

    assert_eq!(sequential.document_count(), parallel.document_count());

    let sequential_ids: Vec<DocumentId> = sequential.document_ids().collect();
    let parallel_ids: Vec<DocumentId> = parallel.document_ids().collect();
    assert_eq!(sequential_ids, parallel_ids);

    for id in sequential_ids {
        assert_eq!(
            sequential.word_frequencies(id),
            parallel.word_frequencies(id),
            "document {id}"
        );
    }

    // Searches over the two engines agree afterwards.
    let seq_hits = sequential.find_top_documents("пушистый кот")?;
    let par_hits = parallel.find_top_documents("пушистый кот")?;
    assert_eq!(seq_hits.len(), par_hits.len());
    for (s, p) in seq_hits.iter().zip(&par_hits) {
        assert_eq!(s.id, p.id);
        assert!((s.relevance - p.relevance).abs() < 1e-6);
    }

    Ok(())
}

#[test]
fn test_process_queries_matches_single_calls() -> Result<()> {
    let engine = large_engine()?;

    let queries: Vec<String> = ["кот", "пёс -хвост", "ошейник белый", "ничего такого"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let batched = process_queries(&engine, &queries)?;

    assert_eq!(batched.len(), queries.len());
    for (raw, batch_hits) in queries.iter().zip(&batched) {
        let single = engine.find_top_documents(raw)?;
        assert_eq!(&single, batch_hits, "query {raw:?}");
    }

    let joined = process_queries_joined(&engine, &queries)?;
    let flattened: Vec<_> = batched.into_iter().flatten().collect();
    assert_eq!(joined, flattened);

    Ok(())
}
