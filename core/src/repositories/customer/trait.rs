//! Customer repository trait defining the interface for customer persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations own the unique-email constraint: the services perform an
//! advisory check-then-write, but the store is the final arbiter and must
//! reject a commit that would violate uniqueness with
//! [`DomainError::DuplicateEmail`].

use async_trait::async_trait;

use crate::domain::entities::customer::{Customer, NewCustomer};
use crate::errors::DomainError;

/// Repository contract for customer record persistence
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns all customer records in store-defined order
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Finds a customer by its unique id
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - record found
    /// * `Ok(None)` - no record with the given id
    /// * `Err(DomainError)` - store failure
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;

    /// Finds a customer by email, the authentication identifier
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Checks whether a record with the given id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Checks whether any customer already holds the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Inserts a new customer and returns it with the store-assigned id
    ///
    /// Fails with [`DomainError::DuplicateEmail`] if the email is taken.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError>;

    /// Commits an updated record, replacing the stored one wholesale
    ///
    /// Last-writer-wins: no version check is performed. Fails with
    /// [`DomainError::DuplicateEmail`] if the new email is held by another
    /// customer.
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Deletes a record
    ///
    /// # Returns
    /// * `Ok(true)` - record was deleted
    /// * `Ok(false)` - no record with the given id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Points a customer record at a blob store key
    async fn set_profile_image_key(&self, id: i64, key: &str) -> Result<(), DomainError>;
}
