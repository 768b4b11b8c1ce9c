//! Mock capabilities for service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::errors::DomainError;
use crate::services::hasher::PasswordHasherTrait;
use crate::services::storage::BlobStoreTrait;

/// Hasher producing recognizable, reversible-for-assertions hashes
pub struct MockPasswordHasher;

impl PasswordHasherTrait for MockPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{plaintext}"))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{plaintext}"))
    }
}

/// In-memory blob store with a switch to make writes fail
pub struct MockBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_puts: AtomicBool,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            fail_puts: AtomicBool::new(false),
        }
    }

    pub fn fail_next_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

impl Default for MockBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStoreTrait for MockBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DomainError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "simulated blob write failure".to_string(),
            });
        }
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        self.blobs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::Storage {
                message: format!("no blob under key [{key}]"),
            })
    }
}
