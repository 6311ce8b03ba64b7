//! Question source port
//!
//! Defines how problem statements are loaded by filename.

use async_trait::async_trait;
use dsa_ask_domain::Question;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a question
///
/// Both variants are terminal for a run: no request is made and nothing
/// is written.
#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file '{}': {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
}

/// Loads questions from some fixed location
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Read the named question as UTF-8 text.
    async fn load(&self, filename: &str) -> Result<Question, QuestionError>;
}
