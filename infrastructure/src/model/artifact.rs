//! Portable model artifact schema
//!
//! Every model variant ships as two JSON files: a TF-IDF vectorizer and a
//! linear classifier. Both carry a `format_version` that is checked before
//! the rest of the document is parsed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// The only artifact format this build understands
pub const FORMAT_VERSION: u32 = 1;

/// Errors raised while reading or validating an artifact
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported artifact format_version {found} (expected {FORMAT_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

/// How the vectorizer cuts text into character n-grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Every n-gram of the whole text, spaces included
    Char,
    /// N-grams inside each word, with the word padded by one space per side
    CharWb,
}

/// Row normalisation applied after idf weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

/// Text clean-up applied before the analyzer runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprocess {
    /// Replace every character outside `[a-z0-9]` with a space, then trim
    #[serde(default)]
    pub replace_non_alphanumeric: bool,
    /// Appended after clean-up
    #[serde(default)]
    pub suffix: Option<String>,
}

fn default_lowercase() -> bool {
    true
}

/// TF-IDF vectorizer document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub format_version: u32,
    pub analyzer: Analyzer,
    pub ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    /// N-gram to column index
    pub vocabulary: HashMap<String, usize>,
    /// One weight per column
    pub idf: Vec<f64>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    #[serde(default)]
    pub preprocess: Option<Preprocess>,
}

/// How decision values become probabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    #[default]
    Multinomial,
    Ovr,
}

/// Linear classifier document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    /// Class labels in model order
    pub classes: Vec<String>,
    /// One row per class, or a single row for a binary model
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub multi_class: MultiClass,
}

#[derive(Deserialize)]
struct VersionProbe {
    format_version: u32,
}

/// Read a JSON artifact, rejecting unknown format versions.
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = std::fs::read_to_string(path)?;
    parse_artifact(&text)
}

/// Parse an artifact from a JSON string, rejecting unknown format versions.
pub fn parse_artifact<T: DeserializeOwned>(text: &str) -> Result<T, ArtifactError> {
    let probe: VersionProbe = serde_json::from_str(text)?;
    if probe.format_version != FORMAT_VERSION {
        return Err(ArtifactError::UnsupportedVersion {
            found: probe.format_version,
        });
    }

    Ok(serde_json::from_str(text)?)
}
