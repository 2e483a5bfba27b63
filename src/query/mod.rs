//! Query parsing.

pub mod parser;

// Re-export commonly used types
pub use parser::*;
