//! Shared error types for Petfolio.

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from account registration, login, and profile updates.
///
/// `MissingField` carries the wire-level field name (camelCase) so the
/// HTTP layer can echo it back verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email or username already exists")]
    IdentityTaken,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid password")]
    InvalidPassword,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors from pet profile operations.
#[derive(Debug, thiserror::Error)]
pub enum PetError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
        assert_eq!(RepositoryError::NotFound.to_string(), "entity not found");
    }

    #[test]
    fn test_account_error_missing_field_display() {
        let err = AccountError::MissingField("lastName");
        assert_eq!(err.to_string(), "lastName is required");
    }

    #[test]
    fn test_account_error_from_repository() {
        let err: AccountError = RepositoryError::Connection.into();
        assert!(matches!(err, AccountError::Storage(_)));
    }

    #[test]
    fn test_pet_error_display() {
        let err = PetError::MissingField("petName");
        assert_eq!(err.to_string(), "petName is required");
    }
}
