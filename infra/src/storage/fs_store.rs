//! Filesystem-backed implementation of the blob store capability.
//!
//! Blobs live as flat files under a root directory, one file per key. Keys
//! are the opaque strings minted by the domain service; anything that could
//! escape the root directory is rejected outright.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use cust_core::errors::DomainError;
use cust_core::services::storage::BlobStoreTrait;

/// Blob store writing objects to the local filesystem
pub struct FileSystemBlobStore {
    root: PathBuf,
}

impl FileSystemBlobStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(DomainError::Storage {
                message: format!("invalid blob key [{key}]"),
            });
        }
        Ok(self.root.join(key))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BlobStoreTrait for FileSystemBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DomainError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to create blob root: {e}"),
            })?;

        fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to write blob [{key}]: {e}"),
            })
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        let path = self.path_for(key)?;

        fs::read(&path).await.map_err(|e| DomainError::Storage {
            message: format!("failed to read blob [{key}]: {e}"),
        })
    }
}
