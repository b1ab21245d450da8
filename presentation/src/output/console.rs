//! Console output formatter for questions, predictions and categories

use crate::http::{PredictResponse, QuestionResponse};
use colored::Colorize;

/// Formats game output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question as a lettered multiple-choice prompt
    pub fn format_question(question: &QuestionResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Guess the TLD"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Domain:".cyan().bold(),
            question.domain
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Category:".cyan().bold(),
            question.category
        ));

        for (letter, option) in ('A'..='Z').zip(&question.options_with_scores) {
            let line = format!("  {}) .{:<12} {:.4}", letter, option.tld, option.score);
            if option.tld == question.answer {
                output.push_str(&format!("{}\n", line.green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        output.push_str(&format!(
            "\n{} .{}\n",
            "Answer:".yellow().bold(),
            question.answer
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the ranked predictions for a base name
    pub fn format_prediction(prediction: &PredictResponse) -> String {
        let mut output = String::new();

        let subject = match &prediction.category {
            Some(category) => format!("{} ({})", prediction.base_name, category),
            None => prediction.base_name.clone(),
        };
        output.push_str(&format!("{} {}\n\n", "Predictions for".cyan().bold(), subject));

        for (rank, option) in prediction.predictions.iter().enumerate() {
            output.push_str(&format!(
                "  {}. .{:<12} {:.4}\n",
                rank + 1,
                option.tld,
                option.score
            ));
        }

        output
    }

    /// One category per line
    pub fn format_categories(categories: &[String]) -> String {
        categories
            .iter()
            .map(|c| format!("{c}\n"))
            .collect()
    }

    /// Pretty JSON for any API body
    pub fn format_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
        serde_json::to_string_pretty(value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tld_guesser_domain::ScoredOption;

    fn question() -> QuestionResponse {
        QuestionResponse {
            domain: "bbc".into(),
            category: "news".into(),
            options: vec!["com".into(), "uk".into()],
            options_with_scores: vec![ScoredOption::new("com", 0.61), ScoredOption::new("uk", 0.2)],
            answer: "uk".into(),
        }
    }

    #[test]
    fn test_question_lists_every_option() {
        let text = ConsoleFormatter::format_question(&question());
        assert!(text.contains("bbc"));
        assert!(text.contains("news"));
        assert!(text.contains("A) .com"));
        assert!(text.contains("B) .uk"));
        assert!(text.contains("0.6100"));
    }

    #[test]
    fn test_prediction_ranks_from_one() {
        let prediction = PredictResponse {
            base_name: "shop".into(),
            category: None,
            predictions: vec![ScoredOption::new("com", 0.7), ScoredOption::new("net", 0.1)],
        };

        let text = ConsoleFormatter::format_prediction(&prediction);
        assert!(text.contains("shop"));
        assert!(text.contains("1. .com"));
        assert!(text.contains("2. .net"));
        assert!(!text.contains("3."));
    }

    #[test]
    fn test_categories_one_per_line() {
        let text = ConsoleFormatter::format_categories(&["arts".into(), "news".into()]);
        assert_eq!(text, "arts\nnews\n");
    }

    #[test]
    fn test_json_matches_api_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&question()).unwrap()).unwrap();
        assert_eq!(value["options"], serde_json::json!(["com", "uk"]));
        assert_eq!(value["options_with_scores"][1]["score"], 0.2);
    }

    #[test]
    fn test_json_reports_unserializable_value() {
        let mut by_pair = std::collections::BTreeMap::new();
        by_pair.insert((1, 2), "tuple keys are not JSON object keys");

        assert!(ConsoleFormatter::format_json(&by_pair).is_err());
    }
}
