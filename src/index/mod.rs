//! Inverted index and document store.

pub mod inverted_index;

// Re-export commonly used types
pub use inverted_index::*;
