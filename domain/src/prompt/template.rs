//! Prompt templates for a single question

use crate::core::question::Question;
use crate::session::entities::{Message, Role};

/// Builds the request payload sent to a model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Default instruction for solving a DSA problem
    pub fn default_instruction() -> &'static str {
        "You are a computer science college student. Solve the following DSA problem and provide your solution with explanation."
    }

    /// Build the two-entry payload: instruction first, then the question verbatim.
    pub fn messages(instruction_role: Role, instruction: &str, question: &Question) -> Vec<Message> {
        vec![
            Message::new(instruction_role, instruction),
            Message::user(question.content()),
        ]
    }
}
