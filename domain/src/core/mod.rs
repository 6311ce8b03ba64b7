//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: model identifiers sent to a provider
//! - [`question::Question`]: a problem statement loaded from disk
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
