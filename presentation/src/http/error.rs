//! HTTP error mapping
//!
//! Only these generic messages reach the client; the detailed cause is
//! logged where the failure happens.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tld_guesser_application::{DatasetError, GenerateQuestionError, PredictTldError};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing base_name")]
    MissingBaseName,

    #[error("Model not found")]
    ModelNotFound,

    #[error("prediction failed")]
    PredictionFailed,

    #[error("Could not load categories")]
    CategoriesUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingBaseName => StatusCode::BAD_REQUEST,
            ApiError::ModelNotFound
            | ApiError::PredictionFailed
            | ApiError::CategoriesUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<GenerateQuestionError> for ApiError {
    fn from(_: GenerateQuestionError) -> Self {
        ApiError::PredictionFailed
    }
}

impl From<PredictTldError> for ApiError {
    fn from(err: PredictTldError) -> Self {
        match err {
            PredictTldError::Validation(_) => ApiError::MissingBaseName,
            PredictTldError::Scoring(e) if e.is_model_unavailable() => ApiError::ModelNotFound,
            PredictTldError::Scoring(_) => ApiError::PredictionFailed,
        }
    }
}

impl From<DatasetError> for ApiError {
    fn from(_: DatasetError) -> Self {
        ApiError::CategoriesUnavailable
    }
}
