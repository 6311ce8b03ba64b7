//! Transcript and error-record persistence.

mod file_store;

pub use file_store::FileTranscriptStore;
