//! List Categories use case

use crate::ports::gameplay_dataset::{DatasetError, GameplayDataset};
use std::sync::Arc;
use tracing::error;

/// Use case returning the sorted, distinct categories of the dataset
pub struct ListCategoriesUseCase<D: GameplayDataset + ?Sized> {
    dataset: Arc<D>,
}

impl<D: GameplayDataset + ?Sized> ListCategoriesUseCase<D> {
    pub fn new(dataset: Arc<D>) -> Self {
        Self { dataset }
    }

    pub fn execute(&self) -> Result<Vec<String>, DatasetError> {
        let mut categories = self
            .dataset
            .categories()
            .inspect_err(|e| error!("Could not load categories: {}", e))?;
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
