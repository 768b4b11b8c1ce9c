//! Main customer domain service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::customer::{CustomerPatch, Gender, NewCustomer};
use crate::domain::value_objects::CustomerView;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CustomerRepository;
use crate::services::hasher::PasswordHasherTrait;
use crate::services::storage::BlobStoreTrait;

/// Domain service owning the customer lifecycle and its invariants
///
/// All collaborators are passed explicitly at construction; nothing here
/// reaches for globals.
pub struct CustomerService<R, H, B>
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
    B: BlobStoreTrait,
{
    /// Customer repository, the authority on id assignment and email uniqueness
    repository: Arc<R>,
    /// One-way credential hasher
    hasher: Arc<H>,
    /// Blob store holding profile images
    blob_store: Arc<B>,
}

impl<R, H, B> CustomerService<R, H, B>
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
    B: BlobStoreTrait,
{
    /// Create a new customer service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, blob_store: Arc<B>) -> Self {
        Self {
            repository,
            hasher,
            blob_store,
        }
    }

    /// Registers a new customer and returns the store-assigned id
    ///
    /// The advisory email check runs first; the repository's uniqueness
    /// constraint remains the final arbiter for concurrent registrations.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
        age: i32,
        gender: Gender,
    ) -> DomainResult<i64> {
        if self.repository.exists_by_email(&email).await? {
            return Err(DomainError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(password)?;
        let created = self
            .repository
            .insert(NewCustomer {
                name,
                email,
                password_hash,
                age,
                gender,
            })
            .await?;

        tracing::info!(customer_id = created.id, "registered customer");
        Ok(created.id)
    }

    /// Returns the read model for a single customer
    pub async fn get(&self, id: i64) -> DomainResult<CustomerView> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id))?;
        Ok(CustomerView::from(&customer))
    }

    /// Returns all customers in store-defined order
    pub async fn list(&self) -> DomainResult<Vec<CustomerView>> {
        let customers = self.repository.find_all().await?;
        Ok(customers.iter().map(CustomerView::from).collect())
    }

    /// Applies a partial update as a single all-or-nothing commit
    ///
    /// Load, diff, validate uniqueness, then commit. A staged email owned by
    /// a different customer fails the whole operation before any change is
    /// applied; a patch that changes nothing fails with
    /// [`DomainError::NoChanges`].
    pub async fn update(&self, id: i64, patch: CustomerPatch) -> DomainResult<()> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        let (updated, changed) = current.merge(&patch);

        if let Some(email) = patch.email.as_deref() {
            // A staged email differs from the current one, so any existing
            // owner is necessarily a different customer.
            if email != current.email && self.repository.exists_by_email(email).await? {
                return Err(DomainError::DuplicateEmail);
            }
        }

        if !changed {
            return Err(DomainError::NoChanges);
        }

        self.repository.update(updated).await?;
        Ok(())
    }

    /// Deletes a customer record unconditionally
    ///
    /// Any referenced blob stays in the store (orphaned-blob policy).
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::customer_not_found(id));
        }
        tracing::info!(customer_id = id, "deleted customer");
        Ok(())
    }

    /// Stores a profile image and points the customer record at it
    ///
    /// Two phases: blob write, then record commit. A failed blob write leaves
    /// the record untouched. A failed commit after a successful write orphans
    /// the blob; the key is logged so an operator sweep can find it.
    pub async fn upload_profile_image(&self, id: i64, bytes: &[u8]) -> DomainResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(DomainError::customer_not_found(id));
        }

        let key = Uuid::new_v4().to_string();
        self.blob_store.put(&key, bytes).await?;

        if let Err(e) = self.repository.set_profile_image_key(id, &key).await {
            tracing::warn!(
                customer_id = id,
                blob_key = %key,
                "profile image blob orphaned: record commit failed after blob write"
            );
            return Err(e);
        }
        Ok(())
    }

    /// Reads the customer's profile image bytes from the blob store
    pub async fn download_profile_image(&self, id: i64) -> DomainResult<Vec<u8>> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        let key = customer
            .profile_image_key
            .ok_or(DomainError::NoProfileImage { customer_id: id })?;

        self.blob_store.get(&key).await
    }
}
