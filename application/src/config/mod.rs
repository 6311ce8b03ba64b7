//! Application-level configuration.
//!
//! - [`AskParams`]: request parameters that are neither domain policy nor provider wiring

pub mod ask_params;

pub use ask_params::AskParams;
