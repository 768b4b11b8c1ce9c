//! One-way credential hashing capability.
//!
//! The concrete algorithm lives in the infrastructure layer; the services
//! only ever see this trait. Hashing is CPU-bound, so the trait is sync and
//! callers are expected to keep inputs small.

use crate::errors::DomainError;

/// One-way hash and verify for stored credentials
pub trait PasswordHasherTrait: Send + Sync {
    /// Hashes a plaintext credential for storage
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Checks a plaintext credential against a stored hash
    ///
    /// `Ok(false)` means the credential does not match; `Err` is reserved for
    /// malformed stored hashes and other unexpected conditions.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}
