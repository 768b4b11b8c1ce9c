//! Tests for the in-memory customer repository

use crate::domain::entities::customer::{Gender, NewCustomer};
use crate::errors::DomainError;
use crate::repositories::customer::{CustomerRepository, MockCustomerRepository};

fn new_customer(name: &str, email: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        age: 30,
        gender: Gender::Female,
    }
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let repo = MockCustomerRepository::new();

    let a = repo.insert(new_customer("A", "a@example.com")).await.unwrap();
    let b = repo.insert(new_customer("B", "b@example.com")).await.unwrap();

    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert!(a.profile_image_key.is_none());
}

#[tokio::test]
async fn test_insert_rejects_duplicate_email() {
    let repo = MockCustomerRepository::new();
    repo.insert(new_customer("A", "a@example.com")).await.unwrap();

    let err = repo
        .insert(new_customer("B", "a@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateEmail));
}

#[tokio::test]
async fn test_update_rejects_email_held_by_other_customer() {
    let repo = MockCustomerRepository::new();
    repo.insert(new_customer("A", "a@example.com")).await.unwrap();
    let b = repo.insert(new_customer("B", "b@example.com")).await.unwrap();

    let mut stolen = b.clone();
    stolen.email = "a@example.com".to_string();

    let err = repo.update(stolen).await.unwrap_err();
    assert!(matches!(err, DomainError::DuplicateEmail));

    // Both records are unchanged.
    let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
    assert_eq!(b_after.email, "b@example.com");
}

#[tokio::test]
async fn test_delete_and_exists() {
    let repo = MockCustomerRepository::new();
    let a = repo.insert(new_customer("A", "a@example.com")).await.unwrap();

    assert!(repo.exists_by_id(a.id).await.unwrap());
    assert!(repo.delete(a.id).await.unwrap());
    assert!(!repo.exists_by_id(a.id).await.unwrap());
    assert!(!repo.delete(a.id).await.unwrap());
}

#[tokio::test]
async fn test_find_by_email_is_case_sensitive() {
    let repo = MockCustomerRepository::new();
    repo.insert(new_customer("A", "a@example.com")).await.unwrap();

    assert!(repo.find_by_email("a@example.com").await.unwrap().is_some());
    assert!(repo.find_by_email("A@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_profile_image_key() {
    let repo = MockCustomerRepository::new();
    let a = repo.insert(new_customer("A", "a@example.com")).await.unwrap();

    repo.set_profile_image_key(a.id, "blob-key").await.unwrap();
    let stored = repo.find_by_id(a.id).await.unwrap().unwrap();
    assert_eq!(stored.profile_image_key.as_deref(), Some("blob-key"));

    let err = repo.set_profile_image_key(999, "k").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
