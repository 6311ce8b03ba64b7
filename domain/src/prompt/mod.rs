//! Prompt domain
//!
//! The instruction sent ahead of every question, and the request payload built from it.

mod template;

pub use template::PromptTemplate;
