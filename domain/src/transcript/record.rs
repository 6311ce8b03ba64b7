//! Transcript of one successful exchange.

use super::{HEADER_TIMESTAMP_FORMAT, ISO_TIMESTAMP_FORMAT, RULE_WIDTH, SEPARATOR_WIDTH};
use crate::core::model::Model;
use crate::session::entities::Message;
use crate::session::response::ModelResponse;
use chrono::NaiveDateTime;

/// Write-once record of a question/answer exchange (Value Object)
///
/// Rendering is deterministic: two records that differ only in
/// `generated_at` render identically apart from the timestamp lines.
#[derive(Debug, Clone)]
pub struct TranscriptRecord {
    pub model: Model,
    pub messages: Vec<Message>,
    pub response: ModelResponse,
    pub generated_at: NaiveDateTime,
}

impl TranscriptRecord {
    pub fn new(
        model: Model,
        messages: Vec<Message>,
        response: ModelResponse,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            model,
            messages,
            response,
            generated_at,
        }
    }

    fn processing_secs(&self) -> f64 {
        self.response.duration.as_secs_f64()
    }

    /// Render the fixed-layout text block.
    ///
    /// Sections, in order: header, input messages, reasoning (only when
    /// present), response, metadata.
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!(
            "\n{rule}\nCONVERSATION LOG - {}\n{rule}\n\nMODEL: {}\nPROCESSING TIME: {:.2} seconds\n\n",
            self.generated_at.format(HEADER_TIMESTAMP_FORMAT),
            self.model,
            self.processing_secs(),
        ));
        out.push_str(&format!("{rule}\nINPUT MESSAGES:\n{rule}\n\n"));

        for message in &self.messages {
            out.push_str(&format!("Role: {}\n", message.role.as_str().to_uppercase()));
            out.push_str(&format!("Content: {}\n", message.content));
            out.push_str(&"-".repeat(SEPARATOR_WIDTH));
            out.push('\n');
        }

        if let Some(reasoning) = &self.response.reasoning {
            out.push_str(&format!(
                "\n{rule}\nMODEL REASONING (Chain of Thought):\n{rule}\n\n{reasoning}\n\n"
            ));
        }

        out.push_str(&format!(
            "\n{rule}\nMODEL RESPONSE:\n{rule}\n\n{}\n\n",
            self.response.content
        ));

        out.push_str(&format!("{rule}\nADDITIONAL METADATA:\n{rule}\n"));
        out.push_str(&format!(
            "- Timestamp: {}\n",
            self.generated_at.format(ISO_TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("- Model: {}\n", self.model));
        out.push_str(&format!(
            "- Processing Time: {:.2} seconds\n",
            self.processing_secs()
        ));
        out.push_str(&format!("- Total Messages: {}\n", self.messages.len()));
        out.push_str(&format!(
            "- Reasoning Content Included: {}\n",
            if self.response.has_reasoning() { "Yes" } else { "No" }
        ));
        if let Some(id) = &self.response.response_id {
            out.push_str(&format!("- Response ID: {id}\n"));
        }
        if let Some(model_used) = &self.response.model_used {
            out.push_str(&format!("- Model Used: {model_used}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Message;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn at(s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, s)
            .unwrap()
    }

    fn messages() -> Vec<Message> {
        vec![
            Message::system("You are a computer science college student."),
            Message::user("Reorder a singly linked list..."),
        ]
    }

    fn record(response: ModelResponse, s: u32) -> TranscriptRecord {
        TranscriptRecord::new(Model::DeepSeekChat, messages(), response, at(s))
    }

    #[test]
    fn test_header_and_metadata() {
        let text = record(
            ModelResponse::new("Use two pointers...").with_duration(Duration::from_millis(2340)),
            9,
        )
        .render();

        assert!(text.contains("CONVERSATION LOG - 2025-03-09 14:05:09"));
        assert!(text.contains("MODEL: deepseek-chat"));
        assert!(text.contains("PROCESSING TIME: 2.34 seconds"));
        assert!(text.contains("- Timestamp: 2025-03-09T14:05:09.000000"));
        assert!(text.contains("- Total Messages: 2"));
        assert!(text.contains("- Reasoning Content Included: No"));
        assert!(!text.contains("- Response ID"));
    }

    #[test]
    fn test_full_layout() {
        let rule = "=".repeat(60);
        let dashes = "-".repeat(40);
        let text = record(
            ModelResponse::new("Use two pointers...")
                .with_reasoning(Some("Find the middle.".to_string()))
                .with_duration(Duration::from_millis(1500)),
            9,
        )
        .render();

        let expected = format!(
            "\n{rule}\nCONVERSATION LOG - 2025-03-09 14:05:09\n{rule}\n\n\
MODEL: deepseek-chat\nPROCESSING TIME: 1.50 seconds\n\n\
{rule}\nINPUT MESSAGES:\n{rule}\n\n\
Role: SYSTEM\nContent: You are a computer science college student.\n{dashes}\n\
Role: USER\nContent: Reorder a singly linked list...\n{dashes}\n\
\n{rule}\nMODEL REASONING (Chain of Thought):\n{rule}\n\nFind the middle.\n\n\
\n{rule}\nMODEL RESPONSE:\n{rule}\n\nUse two pointers...\n\n\
{rule}\nADDITIONAL METADATA:\n{rule}\n\
- Timestamp: 2025-03-09T14:05:09.000000\n\
- Model: deepseek-chat\n\
- Processing Time: 1.50 seconds\n\
- Total Messages: 2\n\
- Reasoning Content Included: Yes\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_each_message_once_in_order() {
        let text = record(ModelResponse::new("Use two pointers..."), 9).render();

        assert_eq!(text.matches("Role: SYSTEM").count(), 1);
        assert_eq!(text.matches("Role: USER").count(), 1);
        assert_eq!(text.matches("Reorder a singly linked list...").count(), 1);
        assert_eq!(
            text.matches("You are a computer science college student.").count(),
            1
        );
        let system = text.find("Role: SYSTEM").unwrap();
        let user = text.find("Role: USER").unwrap();
        assert!(system < user);
    }

    #[test]
    fn test_no_reasoning_section_when_absent() {
        let text = record(ModelResponse::new("Use two pointers..."), 9).render();
        assert!(!text.contains("MODEL REASONING"));
        assert_eq!(text.matches("MODEL RESPONSE:").count(), 1);
    }

    #[test]
    fn test_reasoning_between_inputs_and_response() {
        let response = ModelResponse::new("Use two pointers...")
            .with_reasoning(Some("Split, reverse, merge.".to_string()));
        let text = record(response, 9).render();

        let inputs = text.find("INPUT MESSAGES:").unwrap();
        let reasoning = text.find("MODEL REASONING (Chain of Thought):").unwrap();
        let answer = text.find("MODEL RESPONSE:").unwrap();
        assert!(inputs < reasoning && reasoning < answer);
        assert!(text.contains("\n\nSplit, reverse, merge.\n\n"));
        assert!(text.contains("- Reasoning Content Included: Yes"));
    }

    #[test]
    fn test_provider_metadata_appended() {
        let response = ModelResponse::new("a")
            .with_response_id(Some("resp_123".to_string()))
            .with_model_used(Some("gpt-4.1-nano-2025-04-14".to_string()));
        let text = record(response, 9).render();
        assert!(text.ends_with("- Response ID: resp_123\n- Model Used: gpt-4.1-nano-2025-04-14\n"));
    }

    #[test]
    fn test_only_timestamps_differ_between_runs() {
        let first = record(ModelResponse::new("same"), 9).render();
        let second = record(ModelResponse::new("same"), 42).render();
        assert_ne!(first, second);

        let strip = |text: &str| {
            text.lines()
                .filter(|l| !l.starts_with("CONVERSATION LOG - ") && !l.starts_with("- Timestamp: "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&first), strip(&second));
    }
}
