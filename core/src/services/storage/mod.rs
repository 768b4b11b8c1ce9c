//! Blob storage capability for binary profile images.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Content-addressable-by-key put/get over binary blobs
///
/// Failures surface as [`DomainError::Storage`]. Keys are opaque strings
/// generated by the domain service; implementations may reject keys that do
/// not fit their addressing scheme.
#[async_trait]
pub trait BlobStoreTrait: Send + Sync {
    /// Writes `bytes` under `key`, overwriting any previous object
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DomainError>;

    /// Reads the object stored under `key`
    async fn get(&self, key: &str) -> Result<Vec<u8>, DomainError>;
}
