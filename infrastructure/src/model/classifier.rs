//! Linear (logistic) classifier evaluation

use super::artifact::{ArtifactError, ClassifierArtifact, MultiClass};
use super::vectorizer::SparseRow;
use std::collections::HashSet;

/// A fitted logistic regression over a sparse feature row.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    multi_class: MultiClass,
    n_features: usize,
}

impl LinearClassifier {
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| -> Result<Self, ArtifactError> {
            Err(ArtifactError::Invalid(reason))
        };

        if artifact.classes.is_empty() {
            return invalid("classifier has no classes".into());
        }

        let mut seen = HashSet::new();
        if let Some(dup) = artifact.classes.iter().find(|c| !seen.insert(c.as_str())) {
            return invalid(format!("class {dup:?} is listed twice"));
        }

        let binary = artifact.classes.len() == 2 && artifact.coef.len() == 1;
        if !binary && artifact.coef.len() != artifact.classes.len() {
            return invalid(format!(
                "{} coefficient rows for {} classes",
                artifact.coef.len(),
                artifact.classes.len()
            ));
        }

        if artifact.intercept.len() != artifact.coef.len() {
            return invalid(format!(
                "{} intercepts for {} coefficient rows",
                artifact.intercept.len(),
                artifact.coef.len()
            ));
        }

        let n_features = artifact.coef.first().map_or(0, Vec::len);
        if artifact.coef.iter().any(|row| row.len() != n_features) {
            return invalid("coefficient rows differ in width".into());
        }

        Ok(Self {
            classes: artifact.classes,
            coef: artifact.coef,
            intercept: artifact.intercept,
            multi_class: artifact.multi_class,
            n_features,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// `coef · x + intercept` per coefficient row
    pub fn decision_function(&self, features: &SparseRow) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| {
                features
                    .iter()
                    .filter_map(|(column, value)| row.get(*column).map(|w| w * value))
                    .sum::<f64>()
                    + b
            })
            .collect()
    }

    /// One probability per class, in class order
    pub fn predict_proba(&self, features: &SparseRow) -> Vec<f64> {
        let decisions = self.decision_function(features);

        if let ([z], 2) = (decisions.as_slice(), self.classes.len()) {
            let p = sigmoid(*z);
            return vec![1.0 - p, p];
        }

        match self.multi_class {
            MultiClass::Multinomial => softmax(&decisions),
            MultiClass::Ovr => {
                let raw: Vec<f64> = decisions.iter().map(|z| sigmoid(*z)).collect();
                let total: f64 = raw.iter().sum();
                raw.iter().map(|p| p / total).collect()
            }
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Numerically stable softmax
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let total: f64 = exp.iter().sum();
    exp.iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::FORMAT_VERSION;

    fn artifact(classes: &[&str], coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> ClassifierArtifact {
        ClassifierArtifact {
            format_version: FORMAT_VERSION,
            classes: classes.iter().map(|s| s.to_string()).collect(),
            coef,
            intercept,
            multi_class: MultiClass::Multinomial,
        }
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, 1000.0]);
        let total: f64 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!(probs[3] > 0.99);
    }

    #[test]
    fn test_multinomial_probabilities() {
        let clf = LinearClassifier::from_artifact(artifact(
            &["com", "org", "net"],
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
            vec![0.0, 0.0, 0.0],
        ))
        .unwrap();

        let features = vec![(0, 2.0)];
        assert_eq!(clf.decision_function(&features), vec![2.0, 0.0, 0.0]);

        let probs = clf.predict_proba(&features);
        let denom = 2.0_f64.exp() + 2.0;
        assert!((probs[0] - 2.0_f64.exp() / denom).abs() < 1e-12);
        assert!((probs[1] - 1.0 / denom).abs() < 1e-12);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_features_use_intercepts() {
        let clf = LinearClassifier::from_artifact(artifact(
            &["com", "org"],
            vec![vec![5.0], vec![-5.0]],
            vec![0.0, 0.0],
        ))
        .unwrap();

        assert_eq!(clf.predict_proba(&vec![]), vec![0.5, 0.5]);
    }

    #[test]
    fn test_ovr_normalises() {
        let mut a = artifact(
            &["com", "org", "net"],
            vec![vec![1.0], vec![0.0], vec![-1.0]],
            vec![0.0, 0.0, 0.0],
        );
        a.multi_class = MultiClass::Ovr;
        let clf = LinearClassifier::from_artifact(a).unwrap();

        let probs = clf.predict_proba(&vec![(0, 1.0)]);
        let raw = [sigmoid(1.0), 0.5, sigmoid(-1.0)];
        let total: f64 = raw.iter().sum();
        for (p, r) in probs.iter().zip(raw) {
            assert!((p - r / total).abs() < 1e-12);
        }
    }

    #[test]
    fn test_binary_single_row() {
        let clf = LinearClassifier::from_artifact(artifact(
            &["com", "org"],
            vec![vec![2.0]],
            vec![-1.0],
        ))
        .unwrap();

        let probs = clf.predict_proba(&vec![(0, 1.0)]);
        let p = sigmoid(1.0);
        assert!((probs[0] - (1.0 - p)).abs() < 1e-12);
        assert!((probs[1] - p).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_shape_mismatches() {
        let cases = vec![
            artifact(&[], vec![], vec![]),
            artifact(&["com", "com"], vec![vec![1.0], vec![1.0]], vec![0.0, 0.0]),
            artifact(&["com", "org", "net"], vec![vec![1.0]], vec![0.0]),
            artifact(&["com", "org"], vec![vec![1.0], vec![1.0]], vec![0.0]),
            artifact(&["com", "org"], vec![vec![1.0], vec![1.0, 2.0]], vec![0.0, 0.0]),
        ];

        for case in cases {
            let err = LinearClassifier::from_artifact(case.clone()).unwrap_err();
            assert!(matches!(err, ArtifactError::Invalid(_)), "{case:?}");
        }
    }
}
