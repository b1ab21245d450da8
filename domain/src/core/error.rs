//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("base name cannot be empty")]
    EmptyBaseName,

    #[error("gameplay row is missing `{0}`")]
    IncompleteRow(&'static str),

    #[error("score distribution has {classes} classes but {scores} scores")]
    ScoreShapeMismatch { classes: usize, scores: usize },

    #[error("answer `{0}` is not among the options")]
    AnswerMissing(String),

    #[error("option `{0}` appears more than once")]
    DuplicateOption(String),
}
