//! Factorial calculator with a growable memo table.

use crate::error::ComputeError;
use crate::memo::{DenseStore, MemoCache, Recurrence};

/// Computes factorials against a growable table of known values.
///
/// The table grows monotonically to the largest `n` requested so far and
/// never recomputes an entry; a repeated or smaller request is a plain
/// lookup. 0! and 1! are the base cases.
///
/// # Example
///
/// ```
/// use pascal_core::FactorialCalculator;
///
/// let calculator = FactorialCalculator::new();
/// assert_eq!(calculator.factorial(5).unwrap(), 120);
/// assert_eq!(calculator.factorial(0).unwrap(), 1);
/// ```
pub struct FactorialCalculator {
    cache: MemoCache<usize, u64, DenseStore<u64>, FactorialRule>,
}

impl FactorialCalculator {
    /// Creates a calculator with an empty table.
    pub fn new() -> Self {
        Self {
            cache: MemoCache::new(DenseStore::new(), FactorialRule),
        }
    }

    /// Returns `n!`, or [`ComputeError::FactorialOverflow`] once the value
    /// no longer fits a `u64` (first at `n = 21`).
    pub fn factorial(&self, n: u32) -> Result<u64, ComputeError> {
        self.cache.get(&(n as usize))
    }
}

impl Default for FactorialCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// `n! = n * (n - 1)!` with 0! = 1! = 1.
struct FactorialRule;

impl Recurrence<usize, u64> for FactorialRule {
    type Error = ComputeError;

    fn deps(&self, &n: &usize) -> Vec<usize> {
        if n <= 1 { Vec::new() } else { vec![n - 1] }
    }

    fn compute(&self, &n: &usize, deps: Vec<u64>) -> Result<u64, ComputeError> {
        if n <= 1 {
            return Ok(1);
        }
        (n as u64)
            .checked_mul(deps[0])
            .ok_or(ComputeError::FactorialOverflow { n: n as u32 })
    }
}
