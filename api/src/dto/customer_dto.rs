//! Customer request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cust_core::domain::entities::customer::{CustomerPatch, Gender};
use cust_core::domain::value_objects::CustomerView;

/// Body for POST /api/v1/customers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,

    pub age: i32,

    pub gender: Gender,
}

/// Body for PUT /api/v1/customers/{id}; absent fields mean no change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    pub age: Option<i32>,

    pub gender: Option<Gender>,
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerPatch {
            name: request.name,
            email: request.email,
            age: request.age,
            gender: request.gender,
        }
    }
}

/// Outward customer representation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub age: i32,
    pub roles: Vec<String>,
    pub profile_image_key: Option<String>,
}

impl From<CustomerView> for CustomerDto {
    fn from(view: CustomerView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            email: view.email,
            gender: view.gender,
            age: view.age,
            roles: view.roles,
            profile_image_key: view.profile_image_key,
        }
    }
}
