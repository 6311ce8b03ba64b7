//! Reads question files from a fixed directory.

use async_trait::async_trait;
use dsa_ask_application::ports::question_source::{QuestionError, QuestionSource};
use dsa_ask_domain::Question;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Question source backed by a directory of UTF-8 text files
pub struct FileQuestionSource {
    dir: PathBuf,
}

impl FileQuestionSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve `filename` inside the questions directory.
    ///
    /// Only a single plain path component is accepted; absolute paths and
    /// `..` segments would escape the directory and are reported as missing.
    fn path_for(&self, filename: &str) -> Result<PathBuf, QuestionError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.dir.join(name)),
            _ => Err(QuestionError::NotFound {
                path: self.dir.join(filename),
            }),
        }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self, filename: &str) -> Result<Question, QuestionError> {
        let path = self.path_for(filename)?;
        debug!("Reading question from {}", path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(QuestionError::NotFound { path });
            }
            Err(e) => {
                return Err(QuestionError::Unreadable {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let content = String::from_utf8(bytes).map_err(|e| QuestionError::Unreadable {
            path: path.clone(),
            reason: format!("not valid UTF-8: {}", e.utf8_error()),
        })?;

        Ok(Question::new(filename, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_content_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let raw = "Reorder a singly linked list...\r\n\n  L0 → Ln → L1 → Ln-1\n";
        std::fs::write(dir.path().join("reorder_list.txt"), raw).unwrap();

        let source = FileQuestionSource::new(dir.path());
        let question = source.load("reorder_list.txt").await.unwrap();

        assert_eq!(question.filename(), "reorder_list.txt");
        assert_eq!(question.content(), raw);
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileQuestionSource::new(dir.path());

        let error = source.load("nope.txt").await.unwrap_err();
        match &error {
            QuestionError::NotFound { path } => assert_eq!(path, &dir.path().join("nope.txt")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert!(error.to_string().contains("nope.txt"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("latin1.txt"), [0x48, 0x69, 0xff, 0xfe]).unwrap();

        let source = FileQuestionSource::new(dir.path());
        let error = source.load("latin1.txt").await.unwrap_err();
        assert!(matches!(error, QuestionError::Unreadable { .. }));
        assert!(error.to_string().contains("UTF-8"));
    }

    #[tokio::test]
    async fn test_directory_is_unreadable_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let source = FileQuestionSource::new(dir.path());
        let error = source.load("nested").await.unwrap_err();
        assert!(matches!(error, QuestionError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_absolute_filename_stays_inside_dir() {
        let root = tempfile::tempdir().unwrap();
        let questions = root.path().join("dsa-questions");
        std::fs::create_dir(&questions).unwrap();
        let secret = root.path().join("secret.txt");
        std::fs::write(&secret, "outside the questions dir").unwrap();

        let source = FileQuestionSource::new(&questions);
        let error = source.load(secret.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(error, QuestionError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_parent_segments_are_rejected() {
        let root = tempfile::tempdir().unwrap();
        let questions = root.path().join("dsa-questions");
        std::fs::create_dir(&questions).unwrap();
        std::fs::write(root.path().join("secret.txt"), "outside").unwrap();

        let source = FileQuestionSource::new(&questions);
        for name in ["../secret.txt", "sub/../../secret.txt", ".."] {
            let error = source.load(name).await.unwrap_err();
            assert!(
                matches!(error, QuestionError::NotFound { .. }),
                "{} should not load",
                name
            );
        }
    }
}
