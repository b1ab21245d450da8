//! Artifact-backed [`TldScorer`]

use super::artifact::ArtifactError;
use super::classifier::LinearClassifier;
use super::vectorizer::TfidfVectorizer;
use tld_guesser_application::{ScorerError, TldScorer};
use tld_guesser_domain::ScoreDistribution;

/// Vectorizer and classifier of one model variant, evaluated together.
#[derive(Debug, Clone)]
pub struct LinearTldScorer {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
}

impl LinearTldScorer {
    /// Pair a vectorizer with a classifier; their feature widths must agree.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
    ) -> Result<Self, ArtifactError> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(ArtifactError::Invalid(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }
}

impl TldScorer for LinearTldScorer {
    fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    fn score(&self, text: &str) -> Result<ScoreDistribution, ScorerError> {
        let features = self.vectorizer.transform(text);
        let probabilities = self.classifier.predict_proba(&features);

        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(ScorerError::Inference(format!(
                "non-finite probability for {text:?}"
            )));
        }

        ScoreDistribution::from_pairs(self.classifier.classes(), &probabilities)
            .map_err(|e| ScorerError::Inference(e.to_string()))
    }
}
