//! Prediction query and result

use super::variant::ModelVariant;
use crate::core::error::DomainError;
use crate::scoring::option::ScoredOption;
use serde::{Deserialize, Serialize};

/// A validated request to predict the TLD of a free-form name (Value Object)
///
/// Both fields are trimmed and lower-cased. A blank category counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    base_name: String,
    category: Option<String>,
}

impl PredictionQuery {
    pub fn try_new(base_name: &str, category: Option<&str>) -> Result<Self, DomainError> {
        let base_name = base_name.trim().to_lowercase();
        if base_name.is_empty() {
            return Err(DomainError::EmptyBaseName);
        }

        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());

        Ok(Self {
            base_name,
            category,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn variant(&self) -> ModelVariant {
        ModelVariant::select(self.category())
    }

    pub fn input_text(&self) -> String {
        self.variant().compose_text(&self.base_name, self.category())
    }
}

/// Top predictions for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub base_name: String,
    pub category: Option<String>,
    pub predictions: Vec<ScoredOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_input() {
        let q = PredictionQuery::try_new("  ExampleShop ", Some(" Shopping")).unwrap();
        assert_eq!(q.base_name(), "exampleshop");
        assert_eq!(q.category(), Some("shopping"));
        assert_eq!(q.variant(), ModelVariant::BaseAndCategory);
        assert_eq!(q.input_text(), "exampleshop shopping");
    }

    #[test]
    fn test_blank_base_name_rejected() {
        assert_eq!(
            PredictionQuery::try_new("", None),
            Err(DomainError::EmptyBaseName)
        );
        assert_eq!(
            PredictionQuery::try_new("   ", Some("news")),
            Err(DomainError::EmptyBaseName)
        );
    }

    #[test]
    fn test_blank_category_is_absent() {
        let q = PredictionQuery::try_new("shop", Some("   ")).unwrap();
        assert_eq!(q.category(), None);
        assert_eq!(q.variant(), ModelVariant::BaseOnly);
        assert_eq!(q.input_text(), "shop");
    }
}
