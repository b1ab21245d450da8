//! Game parameters: how many options and predictions a use case returns.

use serde::{Deserialize, Serialize};

/// Sizing knobs for question and prediction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    /// Options offered per question (answer included).
    pub option_count: usize,
    /// Predictions returned by the standalone predictor.
    pub prediction_count: usize,
    /// Decimal places kept on predictor scores.
    pub score_precision: u32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            option_count: 4,
            prediction_count: 5,
            score_precision: 4,
        }
    }
}

impl GameParams {
    pub fn with_option_count(mut self, count: usize) -> Self {
        self.option_count = count;
        self
    }

    pub fn with_prediction_count(mut self, count: usize) -> Self {
        self.prediction_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GameParams::default();
        assert_eq!(params.option_count, 4);
        assert_eq!(params.prediction_count, 5);
        assert_eq!(params.score_precision, 4);
    }

    #[test]
    fn test_builders() {
        let params = GameParams::default()
            .with_option_count(3)
            .with_prediction_count(10);
        assert_eq!(params.option_count, 3);
        assert_eq!(params.prediction_count, 10);
    }
}
