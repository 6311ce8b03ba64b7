//! Presentation layer for dsa-ask
//!
//! This crate contains the CLI definition, console formatting and
//! progress reporting.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ProviderArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
