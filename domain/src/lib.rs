//! Domain layer for tld-guesser
//!
//! This crate contains the core game concepts and their invariants.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Gameplay
//!
//! A [`GameplayRow`] is one playable domain: a base name, its content
//! category and the TLD it really uses.
//!
//! ## Scoring
//!
//! A model turns text into a [`ScoreDistribution`] over the TLDs it knows.
//! Ranking is stable, so ties keep the model's class order.
//!
//! ## Questions
//!
//! A [`Question`] offers a handful of [`ScoredOption`]s and always contains
//! the true answer exactly once.

pub mod core;
pub mod gameplay;
pub mod prediction;
pub mod scoring;

// Re-export commonly used types
pub use core::{error::DomainError, question::Question};
pub use gameplay::row::GameplayRow;
pub use prediction::{
    query::{Prediction, PredictionQuery},
    variant::ModelVariant,
};
pub use scoring::{
    distribution::ScoreDistribution,
    option::{ScoredOption, round_to},
};
