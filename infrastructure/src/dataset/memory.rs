//! In-memory gameplay dataset

use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use tld_guesser_application::{DatasetError, GameplayDataset};
use tld_guesser_domain::GameplayRow;

/// Immutable row set loaded once at startup.
///
/// Construction refuses an empty set, so sampling never fails on a value
/// built through [`InMemoryDataset::new`].
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    rows: Vec<GameplayRow>,
    categories: Vec<String>,
}

impl InMemoryDataset {
    pub fn new(rows: Vec<GameplayRow>) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let categories = rows
            .iter()
            .map(|row| row.category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self { rows, categories })
    }

    pub fn rows(&self) -> &[GameplayRow] {
        &self.rows
    }
}

impl GameplayDataset for InMemoryDataset {
    fn sample_row(&self) -> Result<GameplayRow, DatasetError> {
        self.rows
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(DatasetError::Empty)
    }

    fn categories(&self) -> Result<Vec<String>, DatasetError> {
        Ok(self.categories.clone())
    }
}
