//! Mock capabilities for authentication service tests

use crate::errors::DomainError;
use crate::services::hasher::PasswordHasherTrait;

/// Hasher matching the `hashed:<plaintext>` scheme used across service tests
pub struct MockPasswordHasher;

impl PasswordHasherTrait for MockPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{plaintext}"))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{plaintext}"))
    }
}
