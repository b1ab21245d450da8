//! Question entity

use crate::core::error::DomainError;
use crate::scoring::option::ScoredOption;
use serde::{Deserialize, Serialize};

/// A multiple-choice question about one domain (Entity)
///
/// Built once per request. The constructor enforces that `answer` is among
/// the options exactly once and that no TLD is offered twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    domain: String,
    category: String,
    options: Vec<ScoredOption>,
    answer: String,
}

impl Question {
    pub fn new(
        domain: impl Into<String>,
        category: impl Into<String>,
        options: Vec<ScoredOption>,
        answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let answer = answer.into();

        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|seen| seen.tld == option.tld) {
                return Err(DomainError::DuplicateOption(option.tld.clone()));
            }
        }
        if !options.iter().any(|option| option.tld == answer) {
            return Err(DomainError::AnswerMissing(answer));
        }

        Ok(Self {
            domain: domain.into(),
            category: category.into(),
            options,
            answer,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Options in presentation order, with scores
    pub fn options(&self) -> &[ScoredOption] {
        &self.options
    }

    /// Options in presentation order, TLDs only
    pub fn option_tlds(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.tld.as_str()).collect()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(tlds: &[&str]) -> Vec<ScoredOption> {
        tlds.iter().map(|t| ScoredOption::new(*t, 0.1)).collect()
    }

    #[test]
    fn test_question_creation() {
        let q = Question::new("exampleshop", "shopping", opts(&["net", "com", "io"]), "com")
            .unwrap();
        assert_eq!(q.domain(), "exampleshop");
        assert_eq!(q.category(), "shopping");
        assert_eq!(q.option_tlds(), vec!["net", "com", "io"]);
        assert_eq!(q.answer(), "com");
    }

    #[test]
    fn test_answer_must_be_present() {
        let err = Question::new("bbc", "news", opts(&["com", "org"]), "uk").unwrap_err();
        assert_eq!(err, DomainError::AnswerMissing("uk".to_string()));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = Question::new("bbc", "news", opts(&["uk", "com", "uk"]), "uk").unwrap_err();
        assert_eq!(err, DomainError::DuplicateOption("uk".to_string()));
    }
}
