//! Local filesystem image store
//!
//! Writes images into one directory that the router serves statically.

use std::path::PathBuf;

use async_trait::async_trait;

use medley::{DomainError, ImageStore, StorageKey};

/// Filesystem implementation of ImageStore
pub struct LocalImageStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Location of `key` on disk
    pub fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(key.as_str())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, key: &StorageKey, bytes: &[u8]) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::Storage(format!(
                "Failed to create image directory {}: {e}",
                self.root.display()
            ))
        })?;

        let path = self.path_for(key);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to write {}: {e}", path.display())))?;

        tracing::debug!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> Result<(), DomainError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }

    fn public_url(&self, key: &StorageKey) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), key)
    }
}
