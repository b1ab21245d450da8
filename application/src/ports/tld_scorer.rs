//! TLD scorer port
//!
//! Defines the contract of the black-box classifier and of the catalog that
//! hands out one scorer per model variant. Adapters live in the
//! infrastructure layer.

use std::sync::Arc;
use thiserror::Error;
use tld_guesser_domain::{ModelVariant, ScoreDistribution};

/// Errors that can occur while scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    #[error("Model not available for variant {variant}: {reason}")]
    ModelUnavailable {
        variant: ModelVariant,
        reason: String,
    },

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl ScorerError {
    /// Check if the model itself is missing, as opposed to a failure while
    /// running it
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, ScorerError::ModelUnavailable { .. })
    }
}

/// A loaded classifier that maps text to a probability per TLD
pub trait TldScorer: Send + Sync {
    /// Classes in model order
    fn classes(&self) -> &[String];

    /// Score `text` against every class. Must not mutate model state.
    fn score(&self, text: &str) -> Result<ScoreDistribution, ScorerError>;
}

/// Hands out the scorer for a model variant
pub trait ScorerCatalog: Send + Sync {
    fn scorer(&self, variant: ModelVariant) -> Result<Arc<dyn TldScorer>, ScorerError>;
}
