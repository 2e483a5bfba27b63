//! Text analysis module for Falx.
//!
//! This module provides the small analysis pipeline the engine needs:
//! whitespace tokenization and the validated stop-word set.

pub mod stop_words;
pub mod tokenizer;

// Re-export commonly used types
pub use stop_words::*;
pub use tokenizer::*;
