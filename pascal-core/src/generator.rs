//! Generator facade decoupling callers from the concrete strategy.

use crate::binomial::{BinomialStrategy, FactorialStrategy, TriangleStrategy};
use crate::error::ComputeError;

/// The available coefficient strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Additive recurrence with per-pair memoization (default)
    #[default]
    Triangle,
    /// Factorial ratio over a growable factorial table
    Factorial,
}

/// Facade holding exactly one strategy chosen at construction.
///
/// Callers request coefficients through a single uniform entry point and
/// stay independent of the concrete algorithm; swapping the strategy never
/// changes caller code.
///
/// # Example
///
/// ```
/// use pascal_core::{BinomialGenerator, StrategyKind};
///
/// let generator = BinomialGenerator::new(StrategyKind::Triangle);
/// assert_eq!(generator.coefficient(4, 2).unwrap(), 6);
/// ```
pub struct BinomialGenerator {
    strategy: Box<dyn BinomialStrategy>,
}

impl BinomialGenerator {
    /// Creates a generator over a fresh instance of the given strategy.
    pub fn new(kind: StrategyKind) -> Self {
        let strategy: Box<dyn BinomialStrategy> = match kind {
            StrategyKind::Triangle => Box::new(TriangleStrategy::new()),
            StrategyKind::Factorial => Box::new(FactorialStrategy::new()),
        };
        Self::with_strategy(strategy)
    }

    /// Creates a generator over an existing strategy instance.
    pub fn with_strategy(strategy: Box<dyn BinomialStrategy>) -> Self {
        Self { strategy }
    }

    /// Returns `C(row, col)` from the held strategy.
    pub fn coefficient(&self, row: u32, col: u32) -> Result<u64, ComputeError> {
        self.strategy.coefficient(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_forwards_to_the_selected_strategy() {
        let triangle = BinomialGenerator::new(StrategyKind::Triangle);
        let factorial = BinomialGenerator::new(StrategyKind::Factorial);

        assert_eq!(triangle.coefficient(6, 3).unwrap(), 20);
        assert_eq!(factorial.coefficient(6, 3).unwrap(), 20);
    }

    #[test]
    fn facade_forwards_errors_unchanged() {
        let generator = BinomialGenerator::new(StrategyKind::Triangle);
        assert_eq!(
            generator.coefficient(2, 5),
            Err(ComputeError::ColumnExceedsRow { row: 2, col: 5 })
        );
    }

    #[test]
    fn custom_strategy_instances_are_accepted() {
        let generator = BinomialGenerator::with_strategy(Box::new(FactorialStrategy::new()));
        assert_eq!(generator.coefficient(10, 5).unwrap(), 252);
    }
}
