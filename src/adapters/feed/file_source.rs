//! Local file feed source. Implements ShowtimeSource via tokio fs.

use crate::domain::DomainError;
use crate::ports::ShowtimeSource;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ShowtimeSource for FileSource {
    async fn fetch(&self) -> Result<String, DomainError> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Feed(format!("read {}: {}", self.path.display(), e)))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updated_file.csv");
        std::fs::write(&path, "Film,Date\nDune,2024-06-10\n").unwrap();

        let body = FileSource::new(&path).fetch().await.unwrap();
        assert!(body.starts_with("Film,Date"));
    }

    #[tokio::test]
    async fn test_missing_file_is_feed_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.csv"));
        assert!(matches!(source.fetch().await, Err(DomainError::Feed(_))));
    }
}
