//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Coefficient computation failed
    #[error("Coefficient error: {0}")]
    Compute(#[from] pascal_core::ComputeError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
