//! Interchangeable binomial coefficient strategies.

use crate::error::ComputeError;
use crate::factorial::FactorialCalculator;
use crate::memo::{MemoCache, Recurrence, SparseStore};

/// The capability shared by all coefficient strategies: compute
/// `C(row, col)` for `col <= row`.
///
/// Implementations own their caches exclusively, so repeated queries
/// against the same instance never recompute a value and instances never
/// share state.
pub trait BinomialStrategy {
    /// Returns `C(row, col)`.
    ///
    /// Fails with [`ComputeError::ColumnExceedsRow`] when `col > row`, and
    /// with an overflow error when the result or an intermediate value
    /// does not fit a `u64`.
    fn coefficient(&self, row: u32, col: u32) -> Result<u64, ComputeError>;
}

fn check_position(row: u32, col: u32) -> Result<(), ComputeError> {
    if col > row {
        return Err(ComputeError::ColumnExceedsRow { row, col });
    }
    Ok(())
}

/// Strategy built on the additive recurrence
/// `C(row, col) = C(row - 1, col - 1) + C(row - 1, col)`.
///
/// Interior values are memoized per `(row, col)` pair; each pair is
/// computed at most once per instance. Boundary positions (`col == 0` or
/// `col == row`) are 1 without touching the cache's interior.
pub struct TriangleStrategy {
    cache: MemoCache<(u32, u32), u64, SparseStore<(u32, u32), u64>, TriangleRule>,
}

impl TriangleStrategy {
    /// Creates a strategy with an empty pair cache.
    pub fn new() -> Self {
        Self {
            cache: MemoCache::new(SparseStore::new(), TriangleRule),
        }
    }
}

impl Default for TriangleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialStrategy for TriangleStrategy {
    fn coefficient(&self, row: u32, col: u32) -> Result<u64, ComputeError> {
        check_position(row, col)?;
        self.cache.get(&(row, col))
    }
}

struct TriangleRule;

impl Recurrence<(u32, u32), u64> for TriangleRule {
    type Error = ComputeError;

    fn deps(&self, &(row, col): &(u32, u32)) -> Vec<(u32, u32)> {
        if col == 0 || col == row {
            Vec::new()
        } else {
            vec![(row - 1, col - 1), (row - 1, col)]
        }
    }

    fn compute(&self, &(row, col): &(u32, u32), deps: Vec<u64>) -> Result<u64, ComputeError> {
        if deps.is_empty() {
            return Ok(1);
        }
        deps[0]
            .checked_add(deps[1])
            .ok_or(ComputeError::CoefficientOverflow { row, col })
    }
}

/// Strategy computing `row! / (col! * (row - col)!)` through a growable
/// factorial table.
///
/// The division is exact for every valid position. Boundary positions are
/// 1 without consulting the table, so they stay available past the point
/// where the factorials themselves overflow.
pub struct FactorialStrategy {
    factorials: FactorialCalculator,
}

impl FactorialStrategy {
    /// Creates a strategy with an empty factorial table.
    pub fn new() -> Self {
        Self {
            factorials: FactorialCalculator::new(),
        }
    }
}

impl Default for FactorialStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialStrategy for FactorialStrategy {
    fn coefficient(&self, row: u32, col: u32) -> Result<u64, ComputeError> {
        check_position(row, col)?;
        if col == 0 || col == row {
            return Ok(1);
        }

        let n = self.factorials.factorial(row)?;
        let k = self.factorials.factorial(col)?;
        let nk = self.factorials.factorial(row - col)?;
        let denominator = k
            .checked_mul(nk)
            .ok_or(ComputeError::CoefficientOverflow { row, col })?;
        Ok(n / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies() -> [Box<dyn BinomialStrategy>; 2] {
        [
            Box::new(TriangleStrategy::new()),
            Box::new(FactorialStrategy::new()),
        ]
    }

    #[test]
    fn known_interior_values() {
        for strategy in strategies() {
            assert_eq!(strategy.coefficient(5, 2).unwrap(), 10);
            assert_eq!(strategy.coefficient(8, 3).unwrap(), 56);
            assert_eq!(strategy.coefficient(12, 6).unwrap(), 924);
        }
    }

    #[test]
    fn boundary_columns_are_one() {
        for strategy in strategies() {
            for row in [0, 1, 7, 19] {
                assert_eq!(strategy.coefficient(row, 0).unwrap(), 1);
                assert_eq!(strategy.coefficient(row, row).unwrap(), 1);
            }
        }
    }

    #[test]
    fn column_beyond_row_is_rejected() {
        for strategy in strategies() {
            assert_eq!(
                strategy.coefficient(3, 4),
                Err(ComputeError::ColumnExceedsRow { row: 3, col: 4 })
            );
        }
    }

    #[test]
    fn repeated_calls_return_the_same_value() {
        for strategy in strategies() {
            let first = strategy.coefficient(10, 4).unwrap();
            let second = strategy.coefficient(10, 4).unwrap();
            assert_eq!(first, 210);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn triangle_overflow_is_reported() {
        let strategy = TriangleStrategy::new();
        assert!(matches!(
            strategy.coefficient(100, 50),
            Err(ComputeError::CoefficientOverflow { .. })
        ));
    }

    #[test]
    fn factorial_strategy_overflow_is_reported() {
        let strategy = FactorialStrategy::new();

        assert_eq!(
            strategy.coefficient(21, 2),
            Err(ComputeError::FactorialOverflow { n: 21 })
        );
        // boundary positions bypass the factorial table entirely
        assert_eq!(strategy.coefficient(21, 0).unwrap(), 1);
        assert_eq!(strategy.coefficient(21, 21).unwrap(), 1);
    }
}
