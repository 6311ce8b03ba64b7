//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown provider: {0} (expected \"openai\" or \"deepseek\")")]
    UnknownProvider(String),
}
