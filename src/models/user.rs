//! User model matching the backend `Users` records.

use serde::{Deserialize, Serialize};

/// A registered ticket buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: i64,
    #[serde(rename = "FName", default, deserialize_with = "crate::models::deserialize_text")]
    pub first_name: String,
    #[serde(rename = "LName", default, deserialize_with = "crate::models::deserialize_text")]
    pub last_name: String,
}

impl User {
    /// Placeholder identity used when signing in against an empty dataset.
    pub fn local(first_name: &str) -> Self {
        Self {
            id: 1,
            first_name: first_name.to_string(),
            last_name: String::new(),
        }
    }

    /// Case-insensitive comparison against an entered first name.
    pub fn has_first_name(&self, first_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.to_lowercase()
    }
}

/// Request body for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "FName")]
    pub first_name: String,
    #[serde(rename = "LName")]
    pub last_name: String,
}
