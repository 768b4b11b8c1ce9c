//! Customer entity representing a registered customer record.

use serde::{Deserialize, Serialize};

/// Gender of a customer, stored exactly as submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// Customer entity as held by the repository
///
/// Treated as an immutable value: updates go through [`Customer::merge`],
/// which produces a new value rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned by the repository on insert
    pub id: i64,

    /// Display name, non-empty
    pub name: String,

    /// Authentication identifier, globally unique (case-sensitive as stored)
    pub email: String,

    /// One-way credential hash, never exposed outward
    pub password_hash: String,

    /// Age in years; range validation is the caller's responsibility
    pub age: i32,

    /// Gender as submitted at registration or last update
    pub gender: Gender,

    /// Key of the profile image in the blob store, if one was uploaded
    pub profile_image_key: Option<String>,
}

/// Customer data submitted at registration, before an id exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub gender: Gender,
}

/// A set of optionally-present field values describing requested changes
///
/// An absent field means "no change requested" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl CustomerPatch {
    /// Returns true if no field change is requested at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

impl Customer {
    /// Reconciles this record with a patch, returning the new value and
    /// whether anything actually differs.
    ///
    /// Comparison is exact per field; email and gender get no normalization.
    /// The returned customer keeps the id, credential hash, and profile image
    /// key of `self` untouched.
    pub fn merge(&self, patch: &CustomerPatch) -> (Customer, bool) {
        let mut updated = self.clone();
        let mut changed = false;

        if let Some(name) = &patch.name {
            if *name != self.name {
                updated.name = name.clone();
                changed = true;
            }
        }

        if let Some(email) = &patch.email {
            if *email != self.email {
                updated.email = email.clone();
                changed = true;
            }
        }

        if let Some(age) = patch.age {
            if age != self.age {
                updated.age = age;
                changed = true;
            }
        }

        if let Some(gender) = patch.gender {
            if gender != self.gender {
                updated.gender = gender;
                changed = true;
            }
        }

        (updated, changed)
    }

    /// Returns a copy pointing at the given blob store key
    pub fn with_profile_image_key(&self, key: impl Into<String>) -> Customer {
        let mut updated = self.clone();
        updated.profile_image_key = Some(key.into());
        updated
    }
}
