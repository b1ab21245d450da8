//! Predict TLD use case
//!
//! Scores a free-form base name (and optional category) with the matching
//! model variant and returns the top predictions.

use crate::config::GameParams;
use crate::ports::tld_scorer::{ScorerCatalog, ScorerError};
use std::sync::Arc;
use thiserror::Error;
use tld_guesser_domain::{DomainError, Prediction, PredictionQuery};
use tracing::{debug, error};

/// Errors that can occur during a prediction
#[derive(Error, Debug)]
pub enum PredictTldError {
    #[error("Invalid input: {0}")]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Scoring(#[from] ScorerError),
}

/// Input for the PredictTld use case
#[derive(Debug, Clone, Default)]
pub struct PredictTldInput {
    pub base_name: String,
    pub category: Option<String>,
}

impl PredictTldInput {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Use case for the standalone predictor
pub struct PredictTldUseCase<C: ScorerCatalog + ?Sized> {
    catalog: Arc<C>,
    params: GameParams,
}

impl<C: ScorerCatalog + ?Sized> PredictTldUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            params: GameParams::default(),
        }
    }

    pub fn with_params(mut self, params: GameParams) -> Self {
        self.params = params;
        self
    }

    pub fn execute(&self, input: PredictTldInput) -> Result<Prediction, PredictTldError> {
        let query = PredictionQuery::try_new(&input.base_name, input.category.as_deref())?;
        let variant = query.variant();
        debug!("Predicting {:?} with variant {}", query.input_text(), variant);

        let distribution = self
            .catalog
            .scorer(variant)
            .and_then(|scorer| scorer.score(&query.input_text()))
            .inspect_err(|e| error!("Prediction failed for {}: {}", query.base_name(), e))?;

        let predictions = distribution
            .top(self.params.prediction_count)
            .iter()
            .map(|option| option.rounded(self.params.score_precision))
            .collect();

        Ok(Prediction {
            base_name: query.base_name().to_string(),
            category: query.category().map(str::to_string),
            predictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tld_scorer::TldScorer;
    use std::sync::Mutex;
    use tld_guesser_domain::{ModelVariant, ScoreDistribution};

    /// Records the text it was asked to score
    struct RecordingScorer {
        classes: Vec<String>,
        scores: Vec<f64>,
        seen: Mutex<Vec<String>>,
    }

    impl RecordingScorer {
        fn new(pairs: &[(&str, f64)]) -> Self {
            Self {
                classes: pairs.iter().map(|(t, _)| t.to_string()).collect(),
                scores: pairs.iter().map(|(_, s)| *s).collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TldScorer for RecordingScorer {
        fn classes(&self) -> &[String] {
            &self.classes
        }

        fn score(&self, text: &str) -> Result<ScoreDistribution, ScorerError> {
            self.seen.lock().unwrap().push(text.to_string());
            ScoreDistribution::from_pairs(&self.classes, &self.scores)
                .map_err(|e| ScorerError::Inference(e.to_string()))
        }
    }

    /// Base-only and joint scorers, base-only optional
    struct TwoModelCatalog {
        joint: Arc<RecordingScorer>,
        base_only: Option<Arc<RecordingScorer>>,
    }

    impl ScorerCatalog for TwoModelCatalog {
        fn scorer(&self, variant: ModelVariant) -> Result<Arc<dyn TldScorer>, ScorerError> {
            match variant {
                ModelVariant::BaseAndCategory => Ok(self.joint.clone()),
                ModelVariant::BaseOnly => match &self.base_only {
                    Some(scorer) => Ok(scorer.clone()),
                    None => Err(ScorerError::ModelUnavailable {
                        variant,
                        reason: "not configured".to_string(),
                    }),
                },
            }
        }
    }

    const SEVEN: [(&str, f64); 7] = [
        ("de", 0.05),
        ("com", 0.312345),
        ("org", 0.2),
        ("net", 0.15),
        ("io", 0.123456),
        ("co", 0.1),
        ("uk", 0.064199),
    ];

    fn catalog() -> TwoModelCatalog {
        TwoModelCatalog {
            joint: Arc::new(RecordingScorer::new(&SEVEN)),
            base_only: Some(Arc::new(RecordingScorer::new(&SEVEN))),
        }
    }

    #[test]
    fn test_blank_base_name_is_validation_error() {
        let use_case = PredictTldUseCase::new(Arc::new(catalog()));

        let err = use_case.execute(PredictTldInput::new("   ")).unwrap_err();
        assert!(matches!(
            err,
            PredictTldError::Validation(DomainError::EmptyBaseName)
        ));
    }

    #[test]
    fn test_no_category_uses_base_only_model() {
        let catalog = Arc::new(catalog());
        let use_case = PredictTldUseCase::new(Arc::clone(&catalog));

        let prediction = use_case.execute(PredictTldInput::new("Shop")).unwrap();
        assert_eq!(prediction.base_name, "shop");
        assert_eq!(prediction.category, None);

        let base_seen = catalog.base_only.as_ref().unwrap().seen.lock().unwrap();
        assert_eq!(*base_seen, vec!["shop".to_string()]);
        assert!(catalog.joint.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_category_uses_joint_model() {
        let catalog = Arc::new(catalog());
        let use_case = PredictTldUseCase::new(Arc::clone(&catalog));

        let prediction = use_case
            .execute(PredictTldInput::new("shop").with_category("Shopping "))
            .unwrap();
        assert_eq!(prediction.category.as_deref(), Some("shopping"));
        assert_eq!(
            *catalog.joint.seen.lock().unwrap(),
            vec!["shop shopping".to_string()]
        );
    }

    #[test]
    fn test_top_five_sorted_and_rounded() {
        let use_case = PredictTldUseCase::new(Arc::new(catalog()));

        let prediction = use_case.execute(PredictTldInput::new("shop")).unwrap();
        let tlds: Vec<_> = prediction.predictions.iter().map(|p| p.tld.as_str()).collect();
        assert_eq!(tlds, vec!["com", "org", "net", "io", "co"]);

        let scores: Vec<_> = prediction.predictions.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![0.3123, 0.2, 0.15, 0.1235, 0.1]);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_missing_base_only_model() {
        let use_case = PredictTldUseCase::new(Arc::new(TwoModelCatalog {
            joint: Arc::new(RecordingScorer::new(&SEVEN)),
            base_only: None,
        }));

        let err = use_case.execute(PredictTldInput::new("shop")).unwrap_err();
        assert!(matches!(
            err,
            PredictTldError::Scoring(ScorerError::ModelUnavailable {
                variant: ModelVariant::BaseOnly,
                ..
            })
        ));
    }

    #[test]
    fn test_prediction_count_from_params() {
        let use_case = PredictTldUseCase::new(Arc::new(catalog()))
            .with_params(GameParams::default().with_prediction_count(2));

        let prediction = use_case.execute(PredictTldInput::new("shop")).unwrap();
        assert_eq!(prediction.predictions.len(), 2);
    }
}
