//! Scoring: per-class probabilities and the options built from them.

pub mod distribution;
pub mod option;
