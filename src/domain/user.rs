//! User domain entity and related types.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User record held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Store-assigned identifier
    pub number: u32,
    /// Login handle (not unique)
    pub id: String,
    /// Stored as given; never part of a response
    pub password: String,
    pub name: String,
    pub registered_date: NaiveDate,
}

impl UserRecord {
    /// Create a record registered today
    pub fn new(number: u32, user: NewUser) -> Self {
        Self {
            number,
            id: user.id,
            password: user.password,
            name: user.name,
            registered_date: Local::now().date_naive(),
        }
    }

    /// Overwrite the mutable fields. `number` and `registered_date` stay put.
    pub fn apply(&mut self, patch: UserPatch) {
        self.id = patch.id;
        self.password = patch.password;
        self.name = patch.name;
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    /// Login handle
    #[validate(length(min = 1, message = "id is required"))]
    #[schema(example = "user04")]
    pub id: String,
    /// Password, stored as given
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pass04")]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Otter")]
    pub name: String,
}

impl NewUser {
    pub fn new(id: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// User update data transfer object. Every field is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UserPatch {
    #[validate(length(min = 1, message = "id is required"))]
    #[schema(example = "user02x")]
    pub id: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "p")]
    pub password: String,
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "N")]
    pub name: String,
}

impl UserPatch {
    pub fn new(id: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub number: u32,
    /// Login handle
    #[schema(example = "user01")]
    pub id: String,
    /// Display name
    #[schema(example = "너구리")]
    pub name: String,
    /// Date the record was created
    pub registered_date: NaiveDate,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            number: user.number,
            id: user.id,
            name: user.name,
            registered_date: user.registered_date,
        }
    }
}
