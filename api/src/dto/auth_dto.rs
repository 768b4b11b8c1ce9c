//! Authentication request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cust_core::domain::value_objects::LoginResponse;

use super::customer_dto::CustomerDto;

/// Body for POST /api/v1/auth/login
///
/// `username` carries the email, matching the credential form convention.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "username must be a valid email address"))]
    pub username: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub customer: CustomerDto,
}

impl From<LoginResponse> for LoginResponseDto {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            customer: CustomerDto::from(response.customer),
        }
    }
}
