//! Console output formatter for run results

use colored::Colorize;
use dsa_ask_application::{GatewayError, QuestionError};
use dsa_ask_domain::ModelResponse;
use std::path::Path;

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer: reasoning (when present), response, timing.
    pub fn format_answer(response: &ModelResponse) -> String {
        let mut output = String::new();

        if let Some(reasoning) = &response.reasoning {
            output.push_str(&Self::section("MODEL REASONING (Chain of Thought):"));
            output.push_str(&format!("{}\n", reasoning.dimmed()));
        }

        output.push_str(&Self::section("MODEL RESPONSE:"));
        output.push_str(&response.content);
        output.push('\n');
        output.push_str(&format!("{}\n", Self::rule()));
        output.push_str(&format!(
            "{} {:.2} seconds\n",
            "Processing time:".cyan().bold(),
            response.duration.as_secs_f64()
        ));

        output
    }

    /// Line confirming where the transcript went
    pub fn format_saved(path: &Path) -> String {
        format!("{} {}", "Conversation saved to:".green().bold(), path.display())
    }

    /// Request failure plus where the error record went
    pub fn format_request_failure(error: &GatewayError, error_file: &Path) -> String {
        format!(
            "{} {}\n{} {}",
            "Error occurred:".red().bold(),
            error,
            "Error details saved to:".yellow().bold(),
            error_file.display()
        )
    }

    /// Question could not be loaded
    pub fn format_question_failure(error: &QuestionError) -> String {
        let detail = match error {
            QuestionError::NotFound { .. } => format!("{} {}", "Error:".red().bold(), error),
            QuestionError::Unreadable { reason, .. } => {
                format!("{} {}", "Error reading file:".red().bold(), reason)
            }
        };
        format!("{}\nExiting program due to file read error.", detail)
    }

    fn rule() -> String {
        "=".repeat(60).cyan().to_string()
    }

    fn section(title: &str) -> String {
        format!("{}\n{}\n{}\n", Self::rule(), title.cyan().bold(), Self::rule())
    }
}
