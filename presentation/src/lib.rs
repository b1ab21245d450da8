//! Presentation layer for tld-guesser
//!
//! This crate contains the HTTP API, CLI definitions
//! and console output formatting.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{
    ApiError, AppState, PredictRequest, PredictResponse, QuestionResponse, cors_layer,
    create_router,
};
pub use output::console::ConsoleFormatter;
