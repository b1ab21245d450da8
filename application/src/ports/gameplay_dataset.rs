//! Gameplay dataset port
//!
//! Defines how use cases draw rows and list categories.

use thiserror::Error;
use tld_guesser_domain::GameplayRow;

/// Errors a dataset adapter can report at request time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Dataset has no rows")]
    Empty,

    #[error("Dataset unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of gameplay rows
///
/// Implementations are loaded once and shared across requests, so they must
/// be safe to read from many threads.
pub trait GameplayDataset: Send + Sync {
    /// Pick a row uniformly at random, with replacement.
    fn sample_row(&self) -> Result<GameplayRow, DatasetError>;

    /// Distinct categories, sorted.
    fn categories(&self) -> Result<Vec<String>, DatasetError>;
}
