//! Error type shared by the grid and the trial driver.

use std::io;

use thiserror::Error;

/// Failures reported for invalid grid dimensions, coordinates or trial
/// counts, and for report output that could not be written.
#[derive(Debug, Error)]
pub enum PercolationError {
    #[error("invalid grid size {size}: must be at least 1 and small enough to index")]
    InvalidSize { size: usize },

    #[error("invalid coordinate ({row}, {col}) for a {size}x{size} grid")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("invalid trial count {trials}: must be at least 1")]
    InvalidTrialCount { trials: usize },

    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// Convenience alias for results carrying a [`PercolationError`].
pub type Result<T> = std::result::Result<T, PercolationError>;
