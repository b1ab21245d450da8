//! Application layer for tld-guesser
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameParams;
pub use ports::{
    gameplay_dataset::{DatasetError, GameplayDataset},
    tld_scorer::{ScorerCatalog, ScorerError, TldScorer},
};
pub use use_cases::generate_question::{
    GenerateQuestionError, GenerateQuestionUseCase, compose_question, replacement_slot,
};
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::predict_tld::{PredictTldError, PredictTldInput, PredictTldUseCase};
