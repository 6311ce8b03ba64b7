//! Fallback record written when a request fails.

use super::ISO_TIMESTAMP_FORMAT;
use crate::core::model::Model;
use crate::session::entities::Message;
use chrono::NaiveDateTime;

/// What was attempted, and how it failed (Value Object)
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub model: Model,
    pub question_file: String,
    pub error: String,
    pub messages: Vec<Message>,
}

impl ErrorRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        model: Model,
        question_file: impl Into<String>,
        error: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            timestamp,
            model,
            question_file: question_file.into(),
            error: error.into(),
            messages,
        }
    }

    /// Render the four-line record.
    pub fn render(&self) -> String {
        let messages = self
            .messages
            .iter()
            .map(|m| format!("{{role: {:?}, content: {:?}}}", m.role.as_str(), m.content))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}: Error - {}\nModel: {}\nQuestion file: {}\nMessages: [{}]\n",
            self.timestamp.format(ISO_TIMESTAMP_FORMAT),
            self.error,
            self.model,
            self.question_file,
            messages,
        )
    }
}
