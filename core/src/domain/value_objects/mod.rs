//! Value objects representing immutable domain concepts.

pub mod customer_view;
pub mod login_response;

// Re-export commonly used types
pub use customer_view::{CustomerView, DEFAULT_ROLE};
pub use login_response::LoginResponse;
