//! Scored option value object

use serde::{Deserialize, Serialize};

/// A TLD paired with the probability the model assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub tld: String,
    pub score: f64,
}

impl ScoredOption {
    pub fn new(tld: impl Into<String>, score: f64) -> Self {
        Self {
            tld: tld.into(),
            score,
        }
    }

    /// Copy of this option with the score rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            tld: self.tld.clone(),
            score: round_to(self.score, decimals),
        }
    }
}

/// Round half away from zero to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_four_places() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(0.99999, 4), 1.0);
        assert_eq!(round_to(0.0, 4), 0.0);
    }

    #[test]
    fn test_rounded_keeps_tld() {
        let option = ScoredOption::new("io", 0.333333).rounded(2);
        assert_eq!(option.tld, "io");
        assert_eq!(option.score, 0.33);
    }

    #[test]
    fn test_serializes_as_tld_score_object() {
        let json = serde_json::to_value(ScoredOption::new("com", 0.5)).unwrap();
        assert_eq!(json, serde_json::json!({"tld": "com", "score": 0.5}));
    }
}
