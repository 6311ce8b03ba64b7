//! Ask parameters: what gets sent besides the question.

use dsa_ask_domain::PromptTemplate;

/// Sampling temperature used when none is configured
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Request parameters for [`RunAskUseCase`](crate::use_cases::run_ask::RunAskUseCase).
#[derive(Debug, Clone, PartialEq)]
pub struct AskParams {
    /// Sampling temperature applied to every request.
    pub temperature: f32,
    /// Instruction sent ahead of the question.
    pub instruction: String,
}

impl Default for AskParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            instruction: PromptTemplate::default_instruction().to_string(),
        }
    }
}

impl AskParams {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }
}
