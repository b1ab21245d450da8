//! Gameplay row value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One playable domain: base name, content category and the real TLD (Value Object)
///
/// Rows are loaded in bulk at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameplayRow {
    base_name: String,
    category: String,
    true_tld: String,
}

impl GameplayRow {
    /// Build a row, rejecting blank fields.
    pub fn try_new(
        base_name: impl Into<String>,
        category: impl Into<String>,
        true_tld: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let base_name = base_name.into();
        let category = category.into();
        let true_tld = true_tld.into();

        if base_name.trim().is_empty() {
            return Err(DomainError::IncompleteRow("base_name"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::IncompleteRow("category"));
        }
        if true_tld.trim().is_empty() {
            return Err(DomainError::IncompleteRow("tld"));
        }

        Ok(Self {
            base_name,
            category,
            true_tld,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn true_tld(&self) -> &str {
        &self.true_tld
    }

    /// Text fed to the joint model: `"{base_name} {category}"`
    pub fn input_text(&self) -> String {
        format!("{} {}", self.base_name, self.category)
    }

    /// Key that pins the replacement slot for this row: base name and
    /// category concatenated without a separator.
    pub fn seed_key(&self) -> String {
        format!("{}{}", self.base_name, self.category)
    }
}
