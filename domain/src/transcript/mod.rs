//! Transcript domain.
//!
//! A transcript is the human-readable record of one question/answer
//! exchange; an error record replaces it when the request fails. Both are
//! rendered here as plain text and named from a second-granularity
//! timestamp. Writing them to disk is an infrastructure concern.
//!
//! - [`record::TranscriptRecord`]: successful exchange
//! - [`error_record::ErrorRecord`]: failed request
//! - [`naming`]: `<prefix>_YYYYMMDD_HHMMSS` file stems

pub mod error_record;
pub mod naming;
pub mod record;

/// Section rule used throughout transcripts
pub(crate) const RULE_WIDTH: usize = 60;

/// Separator after each input message
pub(crate) const SEPARATOR_WIDTH: usize = 40;

/// Human-readable timestamp used in the transcript header
pub(crate) const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 local timestamp with microseconds
pub(crate) const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
