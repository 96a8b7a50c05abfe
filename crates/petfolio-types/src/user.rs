//! User account types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user account.
///
/// `password_hash` is an argon2id PHC string and never leaves the backend;
/// responses go through [`UserAccount::to_public`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub ext: Option<String>,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Strip the account down to the fields safe to return to clients.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

/// The client-facing view of a user, in wire casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// Input for registering a new account. The password arrives in plain
/// text and is hashed before anything is stored.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub ext: Option<String>,
    pub email: String,
    pub username: String,
    pub password: SecretString,
}

/// A partial profile update. `None` fields are left unchanged; email and
/// password cannot be changed through this path.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub ext: Option<String>,
    pub username: Option<String>,
}
