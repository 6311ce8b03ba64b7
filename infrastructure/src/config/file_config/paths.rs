//! Path configuration from TOML (`[paths]` section)

use dsa_ask_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw path configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// Directory holding question files, relative to the working directory
    pub questions_dir: String,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            questions_dir: "dsa-questions".to_string(),
        }
    }
}

impl FilePathsConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if !self.questions_dir.trim().is_empty() {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::EmptyPath {
                field: "paths.questions_dir".to_string(),
            },
            "paths.questions_dir is empty; questions will be read from the working directory",
        )]
    }
}
