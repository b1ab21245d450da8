//! Infrastructure layer for tld-guesser
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the CSV gameplay dataset, the portable
//! model artifacts behind the scorer catalog, and configuration file loading.

pub mod config;
pub mod dataset;
pub mod model;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDatasetConfig, FileGameConfig,
    FileModelArtifacts, FileModelsConfig, FileServerConfig,
};
pub use dataset::{CsvDatasetLoader, DatasetLoadError, InMemoryDataset};
pub use model::{
    ArtifactError, ArtifactModelCatalog, LinearClassifier, LinearTldScorer, ModelLoadError,
    TfidfVectorizer,
};
