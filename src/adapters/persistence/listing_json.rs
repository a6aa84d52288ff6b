//! JSON export of the week's listing.
//!
//! Written with the write-replace pattern so readers never see a half-written file.

use crate::domain::{DomainError, Listing};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub struct ListingJson {
    path: PathBuf,
}

impl ListingJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 1. Write to temp file
    /// 2. sync_all() to flush to disk
    /// 3. Rename over the target path
    pub async fn save(&self, listing: &Listing) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(listing)
            .map_err(|e| DomainError::Export(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Export(format!("atomic rename failed: {}", e)))?;

        info!(
            path = %self.path.display(),
            films = listing.films.len(),
            "listing exported (JSON)"
        );
        Ok(())
    }
}
