//! # Falx
//!
//! An in-process, in-memory full-text search engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Inverted index with whole-document removal
//! - TF-IDF ranking with deterministic tie-breaking
//! - Boolean inclusion/exclusion query terms
//! - Sequential and data-parallel execution with identical results
//! - Result pagination, request statistics, duplicate detection
//!
//! ## Example
//!
//! ```
//! use falx::prelude::*;
//!
//! # fn main() -> falx::error::Result<()> {
//! let stop_words = StopWordSet::from_text("and in on")?;
//! let mut engine = SearchEngine::new(stop_words);
//!
//! engine.add_document(0, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3])?;
//! engine.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])?;
//!
//! let hits = engine.find_top_documents("fluffy cat")?;
//! assert_eq!(hits[0].id, 1);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod dedup;
pub mod document;
pub mod error;
pub mod index;
pub mod pagination;
pub mod parallel;
pub mod query;
pub mod request_queue;
pub mod search;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::stop_words::StopWordSet;
    pub use crate::document::{Document, DocumentId, DocumentStatus};
    pub use crate::error::{FalxError, Result};
    pub use crate::parallel::ExecutionPolicy;
    pub use crate::search::engine::{SearchConfig, SearchEngine};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
