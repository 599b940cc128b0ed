//! Object storage port
//!
//! Uploads are external blocking I/O from the caller's perspective; failures
//! surface as `DomainError::StorageError`.

use async_trait::async_trait;

use crate::error::DomainError;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, DomainError>;

/// A file received from a client, ready for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original file name as sent by the client
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Create a new UploadFile
    pub fn new(file_name: String, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The stored location of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Public URL of the stored file
    pub url: String,
    /// Storage-side file name (unique)
    pub file_name: String,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a file and return where it landed
    async fn upload(&self, file: &UploadFile) -> StorageResult<StoredObject>;
}
