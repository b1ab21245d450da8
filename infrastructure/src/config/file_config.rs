//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where needed.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use thiserror::Error;
use tld_guesser_application::GameParams;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("game.option_count must be at least 1")]
    InvalidOptionCount,

    #[error("game.prediction_count must be at least 1")]
    InvalidPredictionCount,

    #[error("dataset.path cannot be empty")]
    EmptyDatasetPath,

    #[error("models.{0} needs both a model and a vectorizer path")]
    IncompleteModel(&'static str),
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Origins allowed to call `/api/*` from a browser
    pub cors_origins: Vec<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "https://tld-predictor-1.onrender.com".to_string(),
            ],
        }
    }
}

/// Raw gameplay dataset configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// CSV with `base_name`, `category` and `tld` columns
    pub path: PathBuf,
}

impl Default for FileDatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fair_game_play.csv"),
        }
    }
}

/// Paths of one model variant's artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModelArtifacts {
    /// Classifier artifact (JSON)
    pub model: PathBuf,
    /// Vectorizer artifact (JSON)
    pub vectorizer: PathBuf,
}

impl FileModelArtifacts {
    pub fn new(model: impl Into<PathBuf>, vectorizer: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            vectorizer: vectorizer.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.model.as_os_str().is_empty() && !self.vectorizer.as_os_str().is_empty()
    }
}

/// Raw models configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Base name + category model; required, questions depend on it
    pub joint: FileModelArtifacts,
    /// Base-name-only model for category-less predictions
    pub base_only: Option<FileModelArtifacts>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            joint: FileModelArtifacts::new("tld_predictor.json", "tld_vectorizer.json"),
            base_only: Some(FileModelArtifacts::new(
                "tld_base_predictor_v2.json",
                "tld_base_vectorizer_v2.json",
            )),
        }
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Options per question
    pub option_count: usize,
    /// Predictions returned by `/api/predict`
    pub prediction_count: usize,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let params = GameParams::default();
        Self {
            option_count: params.option_count,
            prediction_count: params.prediction_count,
        }
    }
}

impl FileGameConfig {
    pub fn to_params(&self) -> GameParams {
        GameParams::default()
            .with_option_count(self.option_count)
            .with_prediction_count(self.prediction_count)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Gameplay dataset settings
    pub dataset: FileDatasetConfig,
    /// Model artifact settings
    pub models: FileModelsConfig,
    /// Game sizing
    pub game: FileGameConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.option_count == 0 {
            return Err(ConfigValidationError::InvalidOptionCount);
        }
        if self.game.prediction_count == 0 {
            return Err(ConfigValidationError::InvalidPredictionCount);
        }
        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDatasetPath);
        }
        if !self.models.joint.is_complete() {
            return Err(ConfigValidationError::IncompleteModel("joint"));
        }
        if let Some(base_only) = &self.models.base_only
            && !base_only.is_complete()
        {
            return Err(ConfigValidationError::IncompleteModel("base_only"));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
