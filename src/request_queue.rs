//! Sliding-window statistics over search requests.

use std::collections::VecDeque;

use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::search::engine::SearchEngine;

/// Number of requests kept in the sliding window (minutes in a day).
const REQUEST_WINDOW: usize = 1440;

/// Outcome of one recorded request.
#[derive(Debug, Clone, Copy)]
struct QueryResult {
    had_results: bool,
}

/// A wrapper over a [`SearchEngine`] that counts empty-result queries over a
/// sliding window of the most recent [`REQUEST_WINDOW`] requests.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<QueryResult>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create a queue over an engine.
    pub fn new(engine: &'a SearchEngine) -> Self {
        RequestQueue {
            engine,
            requests: VecDeque::new(),
            no_result_count: 0,
        }
    }

    /// Run a default (`Actual`-filtered) search and record its outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let hits = self.engine.find_top_documents(raw_query)?;
        self.record(&hits);
        Ok(hits)
    }

    /// Run a status-filtered search and record its outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let hits = self.engine.find_top_documents_with_status(raw_query, status)?;
        self.record(&hits);
        Ok(hits)
    }

    /// Number of requests in the window that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, hits: &[Document]) {
        if self.requests.len() == REQUEST_WINDOW
            && let Some(oldest) = self.requests.pop_front()
            && !oldest.had_results
        {
            self.no_result_count -= 1;
        }

        let had_results = !hits.is_empty();
        if !had_results {
            self.no_result_count += 1;
        }
        self.requests.push_back(QueryResult { had_results });
    }
}
