//! Structured configuration issues.
//!
//! The loader reports everything it finds wrong as a list of
//! [`ConfigIssue`]s instead of failing on the first problem; the caller
//! decides what to do with each [`Severity`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// Provider name is neither "openai" nor "deepseek".
    UnknownProvider { value: String },
    /// Sampling temperature outside what the providers accept.
    TemperatureOutOfRange { value: f32 },
    /// A model field is set to an empty string.
    EmptyModelName { field: String },
    /// A path field is set to an empty string.
    EmptyPath { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_helpers() {
        let err = ConfigIssue::error(
            ConfigIssueCode::UnknownProvider {
                value: "bedrock".to_string(),
            },
            "run.provider: unknown provider 'bedrock'",
        );
        assert!(err.is_error());
        assert_eq!(err.to_string(), "run.provider: unknown provider 'bedrock'");

        let warn = ConfigIssue::warning(
            ConfigIssueCode::TemperatureOutOfRange { value: 3.0 },
            "run.temperature: 3 is outside 0.0..=2.0",
        );
        assert!(!warn.is_error());
    }
}
