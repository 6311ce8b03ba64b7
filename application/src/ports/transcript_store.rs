//! Transcript store port
//!
//! Persists rendered transcripts and error records, one new file each.

use async_trait::async_trait;
use dsa_ask_domain::{ErrorRecord, TranscriptRecord};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a record
///
/// These are fatal for the run; nothing downstream handles them.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Could not create output directory '{}': {reason}", path.display())]
    CreateDir { path: PathBuf, reason: String },

    #[error("Could not write '{}': {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

/// Write-once storage for transcripts and error records
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Persist a transcript and return where it was written.
    async fn write_transcript(&self, record: &TranscriptRecord) -> Result<PathBuf, PersistenceError>;

    /// Persist an error record and return where it was written.
    async fn write_error(&self, record: &ErrorRecord) -> Result<PathBuf, PersistenceError>;
}
