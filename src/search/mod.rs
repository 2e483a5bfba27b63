//! Search engine and batch query execution.

pub mod engine;
pub mod process_queries;

// Re-export commonly used types
pub use engine::{SearchConfig, SearchEngine};
pub use process_queries::{process_queries, process_queries_joined};
