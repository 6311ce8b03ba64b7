//! Domain layer for dsa-ask
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a problem statement loaded from a text file
//! - **Message**: a role-tagged entry of the request payload; the
//!   instruction always precedes the question
//! - **ModelResponse**: answer text, plus chain-of-thought when the model
//!   exposes one
//! - **Transcript**: the rendered, write-once record of an exchange, or an
//!   error record when the request failed

pub mod config;
pub mod core;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model, question::Question};
pub use prompt::PromptTemplate;
pub use providers::{ProviderConfig, ProviderKind};
pub use session::{
    entities::{Message, Role},
    response::ModelResponse,
};
pub use transcript::{error_record::ErrorRecord, record::TranscriptRecord};
