//! Bcrypt implementation of the credential hashing capability.

use cust_core::errors::DomainError;
use cust_core::services::hasher::PasswordHasherTrait;

/// Bcrypt-backed credential hasher
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost
    ///
    /// Lower costs are useful in tests; production should stay at the
    /// default or above.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherTrait for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("bcrypt hash failed: {e}"),
        })
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("bcrypt verify failed: {e}"),
        })
    }
}
