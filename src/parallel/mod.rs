//! Parallel execution support.
//!
//! This module provides the per-call execution selector and the sharded
//! concurrent accumulator used by the parallel ranking and removal paths.
//! Parallelism is internal to a single call and is always joined before the
//! call returns; it is never visible across the call boundary.

pub mod concurrent_map;

pub use concurrent_map::ConcurrentMap;

/// Per-call choice between the sequential and parallel algorithm variants.
///
/// Both variants are semantically equivalent: they return the same set of
/// surviving document ids, with relevance scores differing by at most the
/// configured tie epsilon due to floating summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    /// Single-threaded, fully synchronous execution.
    #[default]
    Sequential,
    /// Data-parallel fan-out over the query word collections.
    Parallel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_sequential() {
        assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::Sequential);
    }
}
