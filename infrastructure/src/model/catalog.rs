//! Scorer catalog built from the configured artifact files

use super::artifact::{ArtifactError, read_artifact};
use super::classifier::LinearClassifier;
use super::scorer::LinearTldScorer;
use super::vectorizer::TfidfVectorizer;
use crate::config::{FileModelArtifacts, FileModelsConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tld_guesser_application::{ScorerCatalog, ScorerError, TldScorer};
use tld_guesser_domain::ModelVariant;
use tracing::{info, warn};

/// A model variant could not be loaded from disk
#[derive(Error, Debug)]
#[error("Failed to load {variant} model from {}: {source}", .path.display())]
pub struct ModelLoadError {
    pub variant: ModelVariant,
    pub path: PathBuf,
    #[source]
    pub source: ArtifactError,
}

/// Every configured model variant, loaded once at startup.
///
/// The joint (base name + category) model is required. The base-only model is
/// optional; when it is missing, requests for it fail with
/// [`ScorerError::ModelUnavailable`] while everything else keeps working.
pub struct ArtifactModelCatalog {
    joint: Arc<dyn TldScorer>,
    base_only: Result<Arc<dyn TldScorer>, String>,
}

impl ArtifactModelCatalog {
    /// Load the configured artifacts. Fails only if the joint model fails.
    pub fn load(config: &FileModelsConfig) -> Result<Self, ModelLoadError> {
        let joint = load_variant(ModelVariant::BaseAndCategory, &config.joint)?;

        let base_only = match &config.base_only {
            Some(artifacts) => match load_variant(ModelVariant::BaseOnly, artifacts) {
                Ok(scorer) => Ok(scorer),
                Err(e) => {
                    warn!("{}; predictions without a category will fail", e);
                    Err(e.to_string())
                }
            },
            None => {
                warn!("No base_only model configured; predictions without a category will fail");
                Err("not configured".to_string())
            }
        };

        Ok(Self { joint, base_only })
    }
}

impl ScorerCatalog for ArtifactModelCatalog {
    fn scorer(&self, variant: ModelVariant) -> Result<Arc<dyn TldScorer>, ScorerError> {
        match variant {
            ModelVariant::BaseAndCategory => Ok(Arc::clone(&self.joint)),
            ModelVariant::BaseOnly => {
                self.base_only
                    .clone()
                    .map_err(|reason| ScorerError::ModelUnavailable { variant, reason })
            }
        }
    }
}

fn load_variant(
    variant: ModelVariant,
    artifacts: &FileModelArtifacts,
) -> Result<Arc<dyn TldScorer>, ModelLoadError> {
    let context = |path: &Path| {
        let path = path.to_path_buf();
        move |source: ArtifactError| ModelLoadError {
            variant,
            path,
            source,
        }
    };

    let vectorizer = read_artifact(&artifacts.vectorizer)
        .and_then(TfidfVectorizer::from_artifact)
        .map_err(context(&artifacts.vectorizer))?;
    let classifier = read_artifact(&artifacts.model)
        .and_then(LinearClassifier::from_artifact)
        .map_err(context(&artifacts.model))?;
    let scorer =
        LinearTldScorer::new(vectorizer, classifier).map_err(context(&artifacts.model))?;

    info!(
        "Loaded {} model ({} classes) from {}",
        variant,
        scorer.classes().len(),
        artifacts.model.display()
    );
    Ok(Arc::new(scorer))
}
