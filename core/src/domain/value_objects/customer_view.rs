//! Outward-facing read model derived from the customer entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::customer::{Customer, Gender};

/// Role granted to every customer; the role model is a single fixed role
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// Fields of a customer that are safe to expose
///
/// The credential hash is structurally absent: there is no field to leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub age: i32,
    pub roles: Vec<String>,
    pub profile_image_key: Option<String>,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            gender: customer.gender,
            age: customer.age,
            roles: vec![DEFAULT_ROLE.to_string()],
            profile_image_key: customer.profile_image_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_carries_fixed_role_and_no_hash() {
        let customer = Customer {
            id: 1,
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            age: 19,
            gender: Gender::Male,
            profile_image_key: Some("key".to_string()),
        };

        let view = CustomerView::from(&customer);
        assert_eq!(view.id, 1);
        assert_eq!(view.roles, vec![DEFAULT_ROLE.to_string()]);
        assert_eq!(view.profile_image_key.as_deref(), Some("key"));

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }
}
