//! Model variant value object

use serde::{Deserialize, Serialize};

/// Which trained model answers a prediction (Value Object)
///
/// The joint model was trained on `"{base_name} {category}"`, the base-only
/// model on the base name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    BaseOnly,
    BaseAndCategory,
}

impl ModelVariant {
    /// Base-only when there is no category, joint otherwise
    pub fn select(category: Option<&str>) -> Self {
        match category {
            Some(_) => ModelVariant::BaseAndCategory,
            None => ModelVariant::BaseOnly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::BaseOnly => "base_only",
            ModelVariant::BaseAndCategory => "base_and_category",
        }
    }

    /// Compose the model input for this variant.
    pub fn compose_text(&self, base_name: &str, category: Option<&str>) -> String {
        match (self, category) {
            (ModelVariant::BaseAndCategory, Some(category)) => {
                format!("{base_name} {category}")
            }
            _ => base_name.to_string(),
        }
    }

    pub fn all() -> [ModelVariant; 2] {
        [ModelVariant::BaseAndCategory, ModelVariant::BaseOnly]
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(ModelVariant::select(None), ModelVariant::BaseOnly);
        assert_eq!(
            ModelVariant::select(Some("shopping")),
            ModelVariant::BaseAndCategory
        );
    }

    #[test]
    fn test_compose_text() {
        assert_eq!(
            ModelVariant::BaseAndCategory.compose_text("shop", Some("shopping")),
            "shop shopping"
        );
        assert_eq!(ModelVariant::BaseOnly.compose_text("shop", None), "shop");
        assert_eq!(
            ModelVariant::BaseOnly.compose_text("shop", Some("shopping")),
            "shop"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ModelVariant::BaseOnly.to_string(), "base_only");
        assert_eq!(
            ModelVariant::BaseAndCategory.to_string(),
            "base_and_category"
        );
    }
}
