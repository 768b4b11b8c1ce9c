//! Domain entities representing core business objects.

pub mod customer;
pub mod token;

// Re-export commonly used types
pub use customer::{Customer, CustomerPatch, Gender, NewCustomer};
pub use token::{Claims, JWT_ISSUER};
