//! Error types for coefficient and factorial computation

use thiserror::Error;

/// Error type for binomial coefficient and factorial computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// The requested position lies outside the triangle
    #[error("column {col} exceeds row {row}")]
    ColumnExceedsRow { row: u32, col: u32 },
    /// The factorial does not fit the value width
    #[error("factorial of {n} exceeds the representable range")]
    FactorialOverflow { n: u32 },
    /// The coefficient or an intermediate sum does not fit the value width
    #[error("coefficient at row {row}, column {col} exceeds the representable range")]
    CoefficientOverflow { row: u32, col: u32 },
}
