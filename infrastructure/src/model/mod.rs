//! Portable model artifacts and their evaluation.
//!
//! A model variant is a [`TfidfVectorizer`] feeding a [`LinearClassifier`],
//! both read from versioned JSON files (see [`artifact`]). The pair is wrapped
//! in a [`LinearTldScorer`], and [`ArtifactModelCatalog`] holds one scorer per
//! configured variant.

pub mod artifact;
mod catalog;
mod classifier;
mod scorer;
mod vectorizer;

pub use artifact::{ArtifactError, FORMAT_VERSION};
pub use catalog::{ArtifactModelCatalog, ModelLoadError};
pub use classifier::{LinearClassifier, softmax};
pub use scorer::LinearTldScorer;
pub use vectorizer::{SparseRow, TfidfVectorizer};
