//! Account service orchestrating registration, login, and profile updates.
//!
//! AccountService coordinates between the UserRepository and PasswordHasher
//! ports. Passwords are hashed before anything touches storage; the stored
//! hash never leaves this layer.

use chrono::Utc;
use petfolio_types::error::{AccountError, RepositoryError};
use petfolio_types::user::{NewAccount, ProfileUpdate, UserAccount};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;
use uuid::Uuid;

use crate::account::password::PasswordHasher;
use crate::account::repository::UserRepository;

/// Orchestrates account lifecycle operations.
///
/// Generic over `UserRepository` and `PasswordHasher` to maintain clean
/// architecture (petfolio-core never depends on petfolio-infra).
pub struct AccountService<U: UserRepository, H: PasswordHasher> {
    users: U,
    hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> AccountService<U, H> {
    /// Create a new account service with the given ports.
    pub fn new(users: U, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Register a new account.
    ///
    /// Required fields are checked first, then email/username uniqueness,
    /// then the password is hashed and the account persisted. A uniqueness
    /// conflict raised by the store itself (two registrations racing) maps
    /// to the same `IdentityTaken` error as the pre-check.
    pub async fn register(&self, new_account: NewAccount) -> Result<UserAccount, AccountError> {
        required(&new_account.last_name, "lastName")?;
        required(&new_account.first_name, "firstName")?;
        required(&new_account.email, "email")?;
        required(&new_account.username, "username")?;
        if new_account.password.expose_secret().is_empty() {
            return Err(AccountError::MissingField("password"));
        }

        if self
            .users
            .identity_exists(&new_account.email, &new_account.username)
            .await?
        {
            return Err(AccountError::IdentityTaken);
        }

        let password_hash = self
            .hasher
            .hash(new_account.password.expose_secret())
            .map_err(|e| AccountError::Hash(e.to_string()))?;

        let now = Utc::now();
        let account = UserAccount {
            id: Uuid::now_v7(),
            last_name: new_account.last_name,
            first_name: new_account.first_name,
            middle_name: new_account.middle_name,
            ext: new_account.ext,
            email: new_account.email,
            username: new_account.username,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        match self.users.create(&account).await {
            Ok(()) => {
                info!(user_id = %account.id, username = %account.username, "User registered");
                Ok(account)
            }
            Err(RepositoryError::Conflict(_)) => Err(AccountError::IdentityTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate by email and password.
    ///
    /// An unknown email and a wrong password are reported as distinct
    /// errors, matching the responses clients already rely on.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserAccount, AccountError> {
        let Some(account) = self.users.find_by_email(email).await? else {
            return Err(AccountError::UserNotFound);
        };

        let matches = self
            .hasher
            .verify(password.expose_secret(), &account.password_hash)
            .map_err(|e| AccountError::Hash(e.to_string()))?;
        if !matches {
            return Err(AccountError::InvalidPassword);
        }

        Ok(account)
    }

    /// Apply a partial profile update and return the updated account.
    ///
    /// `None` fields are left unchanged. Email and password cannot be
    /// changed through this path. An empty `middleName` or `ext` clears
    /// the stored value.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserAccount, AccountError> {
        let Some(mut account) = self.users.find_by_id(&update.user_id).await? else {
            return Err(AccountError::UserNotFound);
        };

        if let Some(first_name) = update.first_name {
            required(&first_name, "firstName")?;
            account.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            required(&last_name, "lastName")?;
            account.last_name = last_name;
        }
        if let Some(middle_name) = update.middle_name {
            account.middle_name = if middle_name.trim().is_empty() {
                None
            } else {
                Some(middle_name)
            };
        }
        if let Some(ext) = update.ext {
            account.ext = if ext.trim().is_empty() {
                None
            } else {
                Some(ext)
            };
        }
        if let Some(username) = update.username {
            required(&username, "username")?;
            account.username = username;
        }
        account.updated_at = Utc::now();

        match self.users.update(&account).await {
            Ok(()) => {
                info!(user_id = %account.id, "Profile updated");
                Ok(account)
            }
            Err(RepositoryError::NotFound) => Err(AccountError::UserNotFound),
            Err(RepositoryError::Conflict(_)) => Err(AccountError::IdentityTaken),
            Err(e) => Err(e.into()),
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<(), AccountError> {
    if value.trim().is_empty() {
        return Err(AccountError::MissingField(field));
    }
    Ok(())
}
