//! Login response value object returned on successful authentication.

use serde::{Deserialize, Serialize};

use super::customer_view::CustomerView;

/// Result of a successful login: the minted token plus the caller's view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,

    /// Read model of the authenticated customer
    pub customer: CustomerView,
}

impl LoginResponse {
    pub fn new(token: String, customer: CustomerView) -> Self {
        Self { token, customer }
    }
}
