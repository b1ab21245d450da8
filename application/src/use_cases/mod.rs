//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_question;
pub mod list_categories;
pub mod predict_tld;
