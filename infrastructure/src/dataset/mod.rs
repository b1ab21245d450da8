//! Gameplay dataset adapters.
//!
//! [`CsvDatasetLoader`] reads the gameplay CSV once at startup into an
//! [`InMemoryDataset`], which implements the
//! [`GameplayDataset`](tld_guesser_application::GameplayDataset) port.

mod csv_loader;
mod memory;

pub use csv_loader::{CsvDatasetLoader, DatasetLoadError};
pub use memory::InMemoryDataset;
