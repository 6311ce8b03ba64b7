//! Question loading from the local filesystem.

mod file_source;

pub use file_source::FileQuestionSource;
