//! Free-form TLD prediction: model variants, queries and results.

pub mod query;
pub mod variant;
