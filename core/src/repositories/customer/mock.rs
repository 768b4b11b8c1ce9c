//! In-memory implementation of CustomerRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::customer::{Customer, NewCustomer};
use crate::errors::DomainError;

use super::trait_::CustomerRepository;

/// In-memory customer repository
///
/// Enforces the unique-email constraint the same way a real store would, so
/// service tests exercise the storage-level arbiter too. Iteration order is
/// ascending id, which stands in for the store-defined list order.
pub struct MockCustomerRepository {
    customers: Arc<RwLock<BTreeMap<i64, Customer>>>,
    next_id: AtomicI64,
}

impl MockCustomerRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the repository with an existing record, keeping id assignment ahead of it
    pub async fn with_customer(self, customer: Customer) -> Self {
        self.next_id.fetch_max(customer.id + 1, Ordering::SeqCst);
        self.customers.write().await.insert(customer.id, customer);
        self
    }
}

impl Default for MockCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| c.email == email))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if customers.values().any(|c| c.email == customer.email) {
            return Err(DomainError::DuplicateEmail);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Customer {
            id,
            name: customer.name,
            email: customer.email,
            password_hash: customer.password_hash,
            age: customer.age,
            gender: customer.gender,
            profile_image_key: None,
        };
        customers.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if !customers.contains_key(&customer.id) {
            return Err(DomainError::customer_not_found(customer.id));
        }

        if customers
            .values()
            .any(|c| c.id != customer.id && c.email == customer.email)
        {
            return Err(DomainError::DuplicateEmail);
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut customers = self.customers.write().await;
        Ok(customers.remove(&id).is_some())
    }

    async fn set_profile_image_key(&self, id: i64, key: &str) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;
        match customers.get_mut(&id) {
            Some(customer) => {
                customer.profile_image_key = Some(key.to_string());
                Ok(())
            }
            None => Err(DomainError::customer_not_found(id)),
        }
    }
}
