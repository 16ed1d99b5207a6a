//! Trait-based recurrence definition.

/// Defines the dependency structure and computation of a memoized
/// recurrence.
///
/// # Type Parameters
///
/// - `I`: index type for the cache
/// - `K`: value type stored in the cache
///
/// # Example
///
/// ```
/// use pascal_core::memo::{DenseStore, MemoCache, Recurrence};
/// use std::convert::Infallible;
///
/// struct Fibonacci;
///
/// impl Recurrence<usize, u64> for Fibonacci {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n <= 1 { *n as u64 } else { deps[0] + deps[1] })
///     }
/// }
///
/// let cache = MemoCache::new(DenseStore::new(), Fibonacci);
/// assert_eq!(cache.get(&10).unwrap(), 55);
/// ```
pub trait Recurrence<I, K> {
    /// Error produced when a value cannot be computed.
    type Error;

    /// Returns the indices this index depends on.
    ///
    /// Base cases return an empty vector. Dependencies must form a DAG.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the index from its resolved dependency
    /// values, given in the order returned by [`deps`](Recurrence::deps).
    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, Self::Error>;
}
