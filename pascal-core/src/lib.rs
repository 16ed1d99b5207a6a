//! Binomial coefficients for Pascal's triangle shapes.
//!
//! Two interchangeable strategies compute `C(row, col)` behind a single
//! generator facade:
//!
//! - [`TriangleStrategy`]: the additive recurrence with per-pair memoization
//! - [`FactorialStrategy`]: the factorial ratio over a growable factorial
//!   table
//!
//! Each strategy instance owns its cache, so instances never share state.
//! Values are exact up to the `u64` width; running out of range is a
//! reported [`ComputeError`], never a silent wrap.
//!
//! The [`memo`] module holds the generic memoization engine both
//! strategies are built on.
//!
//! # Quick Example
//!
//! ```
//! use pascal_core::{BinomialGenerator, StrategyKind};
//!
//! let generator = BinomialGenerator::new(StrategyKind::Factorial);
//! let row: Result<Vec<u64>, _> = (0..=4).map(|col| generator.coefficient(4, col)).collect();
//! assert_eq!(row.unwrap(), vec![1, 4, 6, 4, 1]);
//! ```

mod binomial;
mod error;
mod factorial;
mod generator;
pub mod memo;

pub use binomial::{BinomialStrategy, FactorialStrategy, TriangleStrategy};
pub use error::ComputeError;
pub use factorial::FactorialCalculator;
pub use generator::{BinomialGenerator, StrategyKind};
