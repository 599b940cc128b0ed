//! Local-disk object storage
//!
//! Writes uploads into a configured directory and serves them under a public
//! base URL. Stored names are UUIDs so client file names never collide.

use async_trait::async_trait;
use mission_core::{DomainError, ObjectStorage, StorageResult, StoredObject, UploadFile};
use std::path::PathBuf;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::StorageConfig;

/// Object storage backed by a local upload directory
#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    upload_dir: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl LocalObjectStorage {
    /// Create a new LocalObjectStorage from configuration
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(&config.upload_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_bytes: config.max_file_size_mb as usize * 1024 * 1024,
        }
    }

    /// Derive the stored name: a fresh UUID keeping the client extension
    fn stored_name(original: &str) -> String {
        let id = Uuid::new_v4();
        match original.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() && ext.len() <= 8 => format!("{id}.{ext}"),
            _ => id.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    async fn upload(&self, file: &UploadFile) -> StorageResult<StoredObject> {
        if file.is_empty() {
            return Err(DomainError::ValidationError("empty upload".to_string()));
        }
        if file.bytes.len() > self.max_bytes {
            return Err(DomainError::ValidationError(format!(
                "file exceeds {} bytes",
                self.max_bytes
            )));
        }

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let file_name = Self::stored_name(&file.file_name);
        let path = self.upload_dir.join(&file_name);

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(stored = %file_name, "File uploaded");

        Ok(StoredObject {
            url: format!("{}/{}", self.public_base_url, file_name),
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage(dir: &std::path::Path) -> LocalObjectStorage {
        LocalObjectStorage::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().into_owned(),
            public_base_url: "/uploads".to_string(),
            max_file_size_mb: 1,
        })
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("mission-storage-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_stored_name_keeps_extension() {
        let name = LocalObjectStorage::stored_name("photo.jpg");
        assert!(name.ends_with(".jpg"));

        let name = LocalObjectStorage::stored_name("no-extension");
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_upload_writes_file() {
        let dir = temp_dir();
        let storage = test_storage(&dir);

        let file = UploadFile::new(
            "proof.png".to_string(),
            Some("image/png".to_string()),
            vec![1, 2, 3, 4],
        );
        let stored = storage.upload(&file).await.unwrap();

        assert!(stored.url.starts_with("/uploads/"));
        let on_disk = tokio::fs::read(dir.join(&stored.file_name)).await.unwrap();
        assert_eq!(on_disk, vec![1, 2, 3, 4]);

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let dir = temp_dir();
        let storage = test_storage(&dir);

        let file = UploadFile::new("empty.png".to_string(), None, vec![]);
        assert!(storage.upload(&file).await.is_err());
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let dir = temp_dir();
        let storage = test_storage(&dir);

        let file = UploadFile::new("big.bin".to_string(), None, vec![0; 2 * 1024 * 1024]);
        assert!(storage.upload(&file).await.is_err());
    }
}
