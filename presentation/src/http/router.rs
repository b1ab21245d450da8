//! JSON API routes

use super::dto::{PredictRequest, PredictResponse, QuestionResponse};
use super::error::ApiError;
use super::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// CORS for the `/api` routes, restricted to `origins`.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/question", get(get_question))
        .route("/categories", get(get_categories))
        .route("/predict", post(predict))
        .layer(cors);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_question(State(state): State<AppState>) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.generate_question().execute()?;
    Ok(Json(question.into()))
}

async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.list_categories().execute()?))
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected predict body: {}", rejection.body_text());
        ApiError::MissingBaseName
    })?;
    debug!("Predict request: {:?}", request);

    let prediction = state.predict_tld().execute(request.into())?;
    Ok(Json(prediction.into()))
}
