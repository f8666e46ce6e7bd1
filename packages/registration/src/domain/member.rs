use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Address;

/// A member as submitted for registration.
///
/// Built fresh from the trimmed form values on every submit attempt and
/// handed to the registration service; nothing keeps it afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub username: String,
    pub last_name: String,
    pub first_name: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Address,
}

impl Member {
    pub fn new(
        username: String,
        last_name: String,
        first_name: String,
        password: String,
        phone_number: Option<String>,
        address: Address,
    ) -> Self {
        Self {
            username,
            last_name,
            first_name,
            password,
            phone_number,
            address,
        }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("username", &self.username)
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("password", &"********")
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .finish()
    }
}

/// Answer of the registration service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredMember {
    pub id: Uuid,
    pub status: String,
}
