//! Route handlers and shared application state.

pub mod auth;
pub mod customers;

use std::sync::Arc;

use cust_core::repositories::CustomerRepository;
use cust_core::services::auth::AuthService;
use cust_core::services::customer::CustomerService;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;
use cust_core::services::token::TokenService;

/// Application state shared across handlers
///
/// Generic over the repository and capability implementations so the same
/// handlers serve both production wiring and mock-backed tests.
pub struct AppState<R, H, B>
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
    B: BlobStoreTrait,
{
    pub customer_service: Arc<CustomerService<R, H, B>>,
    pub auth_service: Arc<AuthService<R, H>>,
    pub token_service: Arc<TokenService>,
}
