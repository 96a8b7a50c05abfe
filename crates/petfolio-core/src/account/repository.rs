//! UserRepository trait definition.
//!
//! Provides persistence operations for user accounts.

use petfolio_types::error::RepositoryError;
use petfolio_types::user::UserAccount;
use uuid::Uuid;

/// Repository trait for user account persistence.
///
/// Implementations live in petfolio-infra (e.g., `SqliteUserRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait UserRepository: Send + Sync {
    /// Persist a new account.
    ///
    /// Returns `RepositoryError::Conflict` if the email or username is
    /// already taken.
    fn create(
        &self,
        account: &UserAccount,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Look up an account by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserAccount>, RepositoryError>> + Send;

    /// Look up an account by its ID.
    fn find_by_id(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<UserAccount>, RepositoryError>> + Send;

    /// Check whether any account already uses the given email or username.
    fn identity_exists(
        &self,
        email: &str,
        username: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Update an existing account.
    ///
    /// Returns `RepositoryError::NotFound` if no row matched, and
    /// `RepositoryError::Conflict` if the new username is taken.
    fn update(
        &self,
        account: &UserAccount,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
