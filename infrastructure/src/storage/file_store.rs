//! Writes each record to a new timestamp-named file in one output directory.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use dsa_ask_application::ports::transcript_store::{PersistenceError, TranscriptStore};
use dsa_ask_domain::transcript::naming::{self, ERROR_PREFIX, EXTENSION};
use dsa_ask_domain::{ErrorRecord, ProviderKind, TranscriptRecord};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Names tried (unsuffixed first) before giving up
const MAX_ATTEMPTS: u32 = 1000;

/// Transcript store for one provider's output directory
///
/// The directory is created on first write. Existing files are never
/// overwritten: a same-second collision gets a `_1`, `_2`, … suffix.
pub struct FileTranscriptStore {
    dir: PathBuf,
    transcript_prefix: String,
}

impl FileTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>, transcript_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            transcript_prefix: transcript_prefix.into(),
        }
    }

    /// Store using the provider's transcript prefix
    pub fn for_provider(kind: ProviderKind, dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, kind.transcript_prefix())
    }

    async fn write_new(
        &self,
        prefix: &str,
        timestamp: &NaiveDateTime,
        contents: &str,
    ) -> Result<PathBuf, PersistenceError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PersistenceError::CreateDir {
                path: self.dir.clone(),
                reason: e.to_string(),
            })?;

        let stem = naming::file_stem(prefix, timestamp);
        for suffix in 0..MAX_ATTEMPTS {
            let name = match suffix {
                0 => format!("{}.{}", stem, EXTENSION),
                n => format!("{}_{}.{}", stem, n, EXTENSION),
            };
            let path = self.dir.join(name);

            let file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(PersistenceError::Write {
                        path,
                        reason: e.to_string(),
                    });
                }
            };

            write_or_remove(&path, file, contents).await?;

            debug!("Wrote {} bytes to {}", contents.len(), path.display());
            return Ok(path);
        }

        Err(PersistenceError::Write {
            path: self.dir.join(format!("{}.{}", stem, EXTENSION)),
            reason: format!("no free file name after {} attempts", MAX_ATTEMPTS),
        })
    }
}

/// Write `contents` to a freshly created file, deleting it if the write fails.
async fn write_or_remove<W>(path: &Path, mut file: W, contents: &str) -> Result<(), PersistenceError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        file.write_all(contents.as_bytes()).await?;
        file.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        if let Err(remove) = tokio::fs::remove_file(path).await {
            debug!("Could not remove partial file {}: {}", path.display(), remove);
        }
        return Err(PersistenceError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl TranscriptStore for FileTranscriptStore {
    async fn write_transcript(&self, record: &TranscriptRecord) -> Result<PathBuf, PersistenceError> {
        self.write_new(&self.transcript_prefix, &record.generated_at, &record.render())
            .await
    }

    async fn write_error(&self, record: &ErrorRecord) -> Result<PathBuf, PersistenceError> {
        self.write_new(ERROR_PREFIX, &record.timestamp, &record.render())
            .await
    }
}
