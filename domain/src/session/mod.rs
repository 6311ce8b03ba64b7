//! Prompt/response exchange with a model.
//!
//! - [`entities::Message`]: a role-tagged entry of the request payload
//! - [`response::ModelResponse`]: answer text plus optional reasoning

pub mod entities;
pub mod response;
