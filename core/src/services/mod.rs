//! Business services containing domain logic and use cases.

pub mod auth;
pub mod customer;
pub mod hasher;
pub mod storage;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use customer::CustomerService;
pub use hasher::PasswordHasherTrait;
pub use storage::BlobStoreTrait;
pub use token::{TokenService, TokenServiceConfig};
