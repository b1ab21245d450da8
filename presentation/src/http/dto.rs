//! Request and response bodies of the JSON API

use serde::{Deserialize, Serialize};
use tld_guesser_application::PredictTldInput;
use tld_guesser_domain::{Prediction, Question, ScoredOption};

/// Body of `GET /api/question`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub domain: String,
    pub category: String,
    /// TLD strings in display order
    pub options: Vec<String>,
    /// Same order as `options`, with the model score of each
    pub options_with_scores: Vec<ScoredOption>,
    pub answer: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            domain: question.domain().to_string(),
            category: question.category().to_string(),
            options: question
                .option_tlds()
                .into_iter()
                .map(str::to_string)
                .collect(),
            options_with_scores: question.options().to_vec(),
            answer: question.answer().to_string(),
        }
    }
}

/// Body of `POST /api/predict`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub base_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<PredictRequest> for PredictTldInput {
    fn from(request: PredictRequest) -> Self {
        Self {
            base_name: request.base_name.unwrap_or_default(),
            category: request.category,
        }
    }
}

/// Response of `POST /api/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub base_name: String,
    pub category: Option<String>,
    pub predictions: Vec<ScoredOption>,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            base_name: prediction.base_name,
            category: prediction.category,
            predictions: prediction.predictions,
        }
    }
}
