//! Infrastructure layer for dsa-ask
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;
pub mod questions;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FilePathsConfig, FileProviderConfig, FileProvidersConfig,
    FileRunConfig,
};
pub use providers::{DeepSeekGateway, OpenAiGateway, build_gateway};
pub use questions::FileQuestionSource;
pub use storage::FileTranscriptStore;
