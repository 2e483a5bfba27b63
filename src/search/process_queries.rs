//! Batch query execution over one engine.

use rayon::prelude::*;

use crate::document::Document;
use crate::error::Result;
use crate::search::engine::SearchEngine;

/// Run many queries against one engine, fanned out across rayon workers.
///
/// The output order matches the input order. Each query is answered with the
/// default `Actual` filter. A malformed query fails the whole batch.
pub fn process_queries(engine: &SearchEngine, queries: &[String]) -> Result<Vec<Vec<Document>>> {
    queries
        .par_iter()
        .map(|raw_query| engine.find_top_documents(raw_query))
        .collect()
}

/// Like [`process_queries`], flattening the per-query results in order.
pub fn process_queries_joined(engine: &SearchEngine, queries: &[String]) -> Result<Vec<Document>> {
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
