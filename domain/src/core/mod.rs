//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a multiple-choice question with a guaranteed answer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
