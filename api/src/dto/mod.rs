//! Request and response data transfer objects.

pub mod auth_dto;
pub mod customer_dto;
pub mod error_dto;

pub use auth_dto::{LoginRequest, LoginResponseDto};
pub use customer_dto::{CustomerDto, RegisterCustomerRequest, UpdateCustomerRequest};
pub use error_dto::ErrorResponse;
