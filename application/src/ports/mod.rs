//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod llm_gateway;
pub mod progress;
pub mod question_source;
pub mod transcript_store;
