//! Score distribution returned by a prediction adapter

use super::option::ScoredOption;
use crate::core::error::DomainError;

/// Probabilities for every class a model knows, kept in the model's class order.
///
/// The class order matters: [`ScoreDistribution::ranked`] breaks ties by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDistribution {
    entries: Vec<ScoredOption>,
}

impl ScoreDistribution {
    /// Zip a class list with a probability row of the same length.
    pub fn from_pairs(classes: &[String], scores: &[f64]) -> Result<Self, DomainError> {
        if classes.len() != scores.len() {
            return Err(DomainError::ScoreShapeMismatch {
                classes: classes.len(),
                scores: scores.len(),
            });
        }

        Ok(Self {
            entries: classes
                .iter()
                .zip(scores)
                .map(|(tld, score)| ScoredOption::new(tld.clone(), *score))
                .collect(),
        })
    }

    /// Entries in class order
    pub fn entries(&self) -> &[ScoredOption] {
        &self.entries
    }

    /// Probability of `tld`, if the model knows that class.
    pub fn score_of(&self, tld: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|option| option.tld == tld)
            .map(|option| option.score)
    }

    /// All entries sorted by descending score. The sort is stable, so equal
    /// scores stay in class order.
    pub fn ranked(&self) -> Vec<ScoredOption> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// The `k` highest-scoring entries (fewer if the model has fewer classes).
    pub fn top(&self, k: usize) -> Vec<ScoredOption> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}
