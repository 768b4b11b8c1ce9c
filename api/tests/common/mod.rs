//! Shared fixtures for API integration tests

use std::sync::Arc;

use actix_web::web;
use jsonwebtoken::Algorithm;
use uuid::Uuid;

use cust_api::routes::AppState;
use cust_core::repositories::MockCustomerRepository;
use cust_core::services::auth::AuthService;
use cust_core::services::customer::CustomerService;
use cust_core::services::token::{TokenService, TokenServiceConfig};
use cust_infra::security::BcryptPasswordHasher;
use cust_infra::storage::FileSystemBlobStore;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockCustomerRepository, BcryptPasswordHasher, FileSystemBlobStore>;

/// Builds application state backed by the in-memory repository, a minimum
/// cost bcrypt hasher, and a throwaway blob directory under the temp dir.
pub fn test_state() -> web::Data<TestState> {
    let repository = Arc::new(MockCustomerRepository::new());
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let blob_root = std::env::temp_dir().join(format!("api-test-{}", Uuid::new_v4()));
    let blob_store = Arc::new(FileSystemBlobStore::new(blob_root));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        algorithm: Algorithm::HS256,
        token_expiry_minutes: 60,
    }));

    let customer_service = Arc::new(CustomerService::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
        blob_store,
    ));
    let auth_service = Arc::new(AuthService::new(
        repository,
        hasher,
        Arc::clone(&token_service),
    ));

    web::Data::new(AppState {
        customer_service,
        auth_service,
        token_service,
    })
}

/// Request body for registering a customer with the given email
pub fn register_body(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "password": "password",
        "age": 19,
        "gender": "MALE",
    })
}
