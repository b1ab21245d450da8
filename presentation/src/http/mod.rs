//! HTTP API
//!
//! Three routes under `/api`, all JSON:
//!
//! - `GET /api/question`: one multiple-choice question
//! - `GET /api/categories`: sorted distinct categories
//! - `POST /api/predict`: top TLD predictions for a base name

mod dto;
mod error;
mod router;
mod state;

pub use dto::{PredictRequest, PredictResponse, QuestionResponse};
pub use error::ApiError;
pub use router::{cors_layer, create_router};
pub use state::AppState;
