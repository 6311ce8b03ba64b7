//! Application layer for dsa-ask
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AskParams;
pub use ports::{
    clock::{Clock, SystemClock},
    llm_gateway::{ChatRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    question_source::{QuestionError, QuestionSource},
    transcript_store::{PersistenceError, TranscriptStore},
};
pub use use_cases::run_ask::{AskOutcome, RunAskError, RunAskInput, RunAskUseCase};
