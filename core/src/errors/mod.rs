//! Domain-specific error types and error handling.
//!
//! Every expected failure of the domain and authentication services is a
//! typed variant here; the HTTP layer maps them to status codes. Unexpected
//! failures (storage unreachable, corrupt data) travel through `Internal`.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// No record exists for the requested identifier
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Another customer already holds the requested email
    #[error("email already taken")]
    DuplicateEmail,

    /// An update patch requested nothing that differs from the stored record
    #[error("no data changes found")]
    NoChanges,

    /// Unknown identity or wrong credential; deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token failed signature, expiry, format, or subject checks
    #[error("invalid token")]
    InvalidToken,

    /// The customer exists but has no profile image reference
    #[error("customer with id [{customer_id}] profile image not found")]
    NoProfileImage { customer_id: i64 },

    /// Blob store read or write failed
    #[error("storage error: {message}")]
    Storage { message: String },

    /// Unexpected failure; not part of the caller-facing taxonomy
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Convenience constructor for the customer-by-id lookup failure
    pub fn customer_not_found(id: i64) -> Self {
        DomainError::NotFound {
            resource: format!("customer with id [{id}]"),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
