//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use pascal_core::StrategyKind;

/// Shape to render
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Shape {
    /// Pascal's triangle, rows top-down
    Triangle,
    /// Diamond silhouette: ascending rows, then the same rows descending
    Diamond,
}

/// Coefficient strategy selection
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Strategy {
    /// Additive recurrence with per-pair memoization (default)
    #[default]
    Triangle,
    /// Factorial ratio over a growable factorial table
    Factorial,
}

impl From<Strategy> for StrategyKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Triangle => StrategyKind::Triangle,
            Strategy::Factorial => StrategyKind::Factorial,
        }
    }
}

/// Pascal's triangle and diamond printer
#[derive(Parser, Debug)]
#[command(name = "pascal", about = "Print Pascal's triangle and diamond shapes", version)]
pub struct Args {
    /// Shape to print (prints the classic demo sequence if omitted)
    #[arg(short, long, value_enum)]
    pub shape: Option<Shape>,

    /// Coefficient strategy
    #[arg(long, value_enum, default_value = "triangle")]
    pub strategy: Strategy,

    /// Number of rows (defaults to 10 for the triangle, 13 for the diamond)
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Half-width each line is centered against (defaults to 15 / 25)
    #[arg(long)]
    pub half_width: Option<usize>,
}
