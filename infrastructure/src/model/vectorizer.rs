//! Character n-gram TF-IDF vectorizer

use super::artifact::{Analyzer, ArtifactError, Norm, Preprocess, VectorizerArtifact};
use std::collections::{BTreeMap, HashMap};

/// Sparse feature row: `(column, value)` pairs in ascending column order
pub type SparseRow = Vec<(usize, f64)>;

/// Evaluates a fitted TF-IDF vectorizer over character n-grams.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    analyzer: Analyzer,
    min_n: usize,
    max_n: usize,
    lowercase: bool,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    sublinear_tf: bool,
    norm: Norm,
    preprocess: Option<Preprocess>,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ArtifactError> {
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ArtifactError::Invalid(format!(
                "ngram_range ({min_n}, {max_n}) is not a valid range"
            )));
        }

        if let Some((gram, column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= artifact.idf.len())
        {
            return Err(ArtifactError::Invalid(format!(
                "vocabulary entry {gram:?} points at column {column}, but idf has {} columns",
                artifact.idf.len()
            )));
        }

        if artifact.idf.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid("idf contains non-finite weights".into()));
        }

        Ok(Self {
            analyzer: artifact.analyzer,
            min_n,
            max_n,
            lowercase: artifact.lowercase,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            preprocess: artifact.preprocess,
        })
    }

    /// Number of feature columns
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Turn `text` into a TF-IDF row. Unknown n-grams are dropped, so the
    /// row may be empty.
    pub fn transform(&self, text: &str) -> SparseRow {
        let text = self.prepare(text);

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for gram in self.ngrams(&text) {
            if let Some(&column) = self.vocabulary.get(&gram) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(column, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (column, tf * self.idf[column])
            })
            .collect();

        let scale = match self.norm {
            Norm::L2 => row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => row.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if scale > 0.0 {
            row.iter_mut().for_each(|(_, v)| *v /= scale);
        }

        row
    }

    fn prepare(&self, text: &str) -> String {
        let mut text = text.to_string();

        if let Some(preprocess) = &self.preprocess {
            if preprocess.replace_non_alphanumeric {
                text = text
                    .to_lowercase()
                    .chars()
                    .map(|c| {
                        if c.is_ascii_lowercase() || c.is_ascii_digit() {
                            c
                        } else {
                            ' '
                        }
                    })
                    .collect::<String>()
                    .trim()
                    .to_string();
            }
            if let Some(suffix) = &preprocess.suffix {
                text.push_str(suffix);
            }
        }

        if self.lowercase {
            text = text.to_lowercase();
        }

        collapse_whitespace(&text)
    }

    fn ngrams(&self, text: &str) -> Vec<String> {
        match self.analyzer {
            Analyzer::Char => {
                let chars: Vec<char> = text.chars().collect();
                let mut grams = Vec::new();
                for n in self.min_n..=self.max_n {
                    if n > chars.len() {
                        break;
                    }
                    grams.extend(chars.windows(n).map(|w| w.iter().collect::<String>()));
                }
                grams
            }
            Analyzer::CharWb => {
                let mut grams = Vec::new();
                for word in text.split_whitespace() {
                    let padded: Vec<char> = std::iter::once(' ')
                        .chain(word.chars())
                        .chain(std::iter::once(' '))
                        .collect();
                    for n in self.min_n..=self.max_n {
                        // A padded word shorter than n still yields itself once.
                        if n >= padded.len() {
                            grams.push(padded.iter().collect());
                            break;
                        }
                        grams.extend(padded.windows(n).map(|w| w.iter().collect::<String>()));
                    }
                }
                grams
            }
        }
    }
}

/// Replace runs of two or more whitespace characters with a single space.
///
/// A lone whitespace character is kept as is, so a single tab still shows up
/// as a tab inside char n-grams.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        if chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::FORMAT_VERSION;

    fn artifact(analyzer: Analyzer, range: (usize, usize), vocab: &[&str]) -> VectorizerArtifact {
        VectorizerArtifact {
            format_version: FORMAT_VERSION,
            analyzer,
            ngram_range: range,
            lowercase: true,
            vocabulary: vocab
                .iter()
                .enumerate()
                .map(|(i, g)| (g.to_string(), i))
                .collect(),
            idf: vec![1.0; vocab.len()],
            sublinear_tf: false,
            norm: Norm::None,
            preprocess: None,
        }
    }

    fn assert_row(actual: &SparseRow, expected: &[(usize, f64)]) {
        assert_eq!(actual.len(), expected.len(), "row {actual:?}");
        for ((ac, av), (ec, ev)) in actual.iter().zip(expected) {
            assert_eq!(ac, ec);
            assert!((av - ev).abs() < 1e-12, "column {ac}: {av} != {ev}");
        }
    }

    #[test]
    fn test_char_bigrams_with_idf_and_l2() {
        let mut a = artifact(Analyzer::Char, (2, 2), &["ab", "bc", "ca"]);
        a.idf = vec![1.0, 2.0, 1.0];
        a.norm = Norm::L2;
        let v = TfidfVectorizer::from_artifact(a).unwrap();

        // ab x2, bc x1, ca x1 -> weighted [2, 2, 1] -> l2 norm 3
        let row = v.transform("abcab");
        assert_row(&row, &[(0, 2.0 / 3.0), (1, 2.0 / 3.0), (2, 1.0 / 3.0)]);
    }

    #[test]
    fn test_unknown_ngrams_dropped() {
        let v = TfidfVectorizer::from_artifact(artifact(Analyzer::Char, (2, 2), &["ab"])).unwrap();

        assert_row(&v.transform("abab"), &[(0, 2.0)]);
        assert!(v.transform("xyz").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn test_char_spans_ngram_range_and_spaces() {
        let v = TfidfVectorizer::from_artifact(artifact(
            Analyzer::Char,
            (1, 3),
            &["a", " ", "a b", "ab"],
        ))
        .unwrap();

        // Lowercased and collapsed to "a b"
        let row = v.transform("A \t B");
        assert_row(&row, &[(0, 1.0), (1, 1.0), (2, 1.0)]);
    }

    #[test]
    fn test_char_wb_pads_words() {
        let v = TfidfVectorizer::from_artifact(artifact(
            Analyzer::CharWb,
            (2, 2),
            &[" a", "ab", "b ", " c", "c ", "b c"],
        ))
        .unwrap();

        let row = v.transform("ab c");
        assert_row(&row, &[(0, 1.0), (1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0)]);
    }

    #[test]
    fn test_char_wb_short_word_yields_itself() {
        let v =
            TfidfVectorizer::from_artifact(artifact(Analyzer::CharWb, (4, 5), &[" a "])).unwrap();

        // " a " is shorter than 4 and is emitted once, not once per n
        assert_row(&v.transform("a"), &[(0, 1.0)]);
    }

    #[test]
    fn test_sublinear_tf_and_l1() {
        let mut a = artifact(Analyzer::Char, (1, 1), &["a", "b"]);
        a.sublinear_tf = true;
        a.norm = Norm::L1;
        let v = TfidfVectorizer::from_artifact(a).unwrap();

        let tf_a = 1.0 + 2.0_f64.ln();
        let total = tf_a + 1.0;
        assert_row(&v.transform("aab"), &[(0, tf_a / total), (1, 1.0 / total)]);
    }

    #[test]
    fn test_preprocess_replaces_and_appends_suffix() {
        let mut a = artifact(Analyzer::Char, (1, 1), &[]);
        a.preprocess = Some(Preprocess {
            replace_non_alphanumeric: true,
            suffix: Some(" website".to_string()),
        });
        let v = TfidfVectorizer::from_artifact(a).unwrap();

        assert_eq!(v.prepare("My-Shop!"), "my shop website");
        assert_eq!(v.prepare("café  24"), "caf 24 website");
    }

    #[test]
    fn test_only_whitespace_runs_collapse() {
        assert_eq!(collapse_whitespace("a\tb"), "a\tb");
        assert_eq!(collapse_whitespace("a\t\tb  c d"), "a b c d");
        assert_eq!(collapse_whitespace(" \n "), " ");

        let v = TfidfVectorizer::from_artifact(artifact(Analyzer::Char, (2, 2), &["a\t", "a "]))
            .unwrap();
        assert_row(&v.transform("a\tb"), &[(0, 1.0)]);
    }

    #[test]
    fn test_lowercase_can_be_disabled() {
        let mut a = artifact(Analyzer::Char, (1, 1), &["A"]);
        a.lowercase = false;
        let v = TfidfVectorizer::from_artifact(a).unwrap();

        assert_row(&v.transform("Aa"), &[(0, 1.0)]);
    }

    #[test]
    fn test_rejects_bad_range() {
        let err =
            TfidfVectorizer::from_artifact(artifact(Analyzer::Char, (3, 2), &[])).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));

        let err =
            TfidfVectorizer::from_artifact(artifact(Analyzer::Char, (0, 2), &[])).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
    }

    #[test]
    fn test_rejects_vocabulary_outside_idf() {
        let mut a = artifact(Analyzer::Char, (1, 1), &["a", "b"]);
        a.idf = vec![1.0];
        let err = TfidfVectorizer::from_artifact(a).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
    }
}
