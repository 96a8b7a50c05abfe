//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `petfolio-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, writer for mutations.

use petfolio_core::account::repository::UserRepository;
use petfolio_types::error::RepositoryError;
use petfolio_types::user::UserAccount;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain UserAccount.
struct UserRow {
    id: String,
    last_name: String,
    first_name: String,
    middle_name: Option<String>,
    ext: Option<String>,
    email: String,
    username: String,
    password_hash: String,
    created_at: String,
    updated_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            last_name: row.try_get("last_name")?,
            first_name: row.try_get("first_name")?,
            middle_name: row.try_get("middle_name")?,
            ext: row.try_get("ext")?,
            email: row.try_get("email")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_account(self) -> Result<UserAccount, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;

        Ok(UserAccount {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            ext: self.ext,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            created_at,
            updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// UserRepository implementation
// ---------------------------------------------------------------------------

impl UserRepository for SqliteUserRepository {
    async fn create(&self, account: &UserAccount) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO users (id, last_name, first_name, middle_name, ext, email, username, password_hash, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(account.id.to_string())
        .bind(&account.last_name)
        .bind(&account.first_name)
        .bind(&account.middle_name)
        .bind(&account.ext)
        .bind(&account.email)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(format_datetime(&account.created_at))
        .bind(format_datetime(&account.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => Err(
                RepositoryError::Conflict("email or username already exists".to_string()),
            ),
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row = UserRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row = UserRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn identity_exists(&self, email: &str, username: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM users WHERE email = ? OR username = ?")
            .bind(email)
            .bind(username)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count > 0)
    }

    async fn update(&self, account: &UserAccount) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE users
               SET last_name = ?, first_name = ?, middle_name = ?, ext = ?,
                   email = ?, username = ?, password_hash = ?, updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&account.last_name)
        .bind(&account.first_name)
        .bind(&account.middle_name)
        .bind(&account.ext)
        .bind(&account.email)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(format_datetime(&account.updated_at))
        .bind(account.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.message().contains("UNIQUE") {
                    return RepositoryError::Conflict(
                        "email or username already exists".to_string(),
                    );
                }
            }
            RepositoryError::Query(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_account(email: &str, username: &str) -> UserAccount {
        UserAccount {
            id: Uuid::now_v7(),
            last_name: "Reyes".to_string(),
            first_name: "Ana".to_string(),
            middle_name: None,
            ext: None,
            email: email.to_string(),
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let account = make_account("ana@example.com", "ana");
        repo.create(&account).await.unwrap();

        let found = repo.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, account.id);
        assert_eq!(found.username, "ana");
        assert_eq!(found.password_hash, account.password_hash);
    }

    #[tokio::test]
    async fn test_find_by_email_missing_returns_none() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let found = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let account = make_account("ana@example.com", "ana");
        repo.create(&account).await.unwrap();

        let found = repo.find_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(found.email, "ana@example.com");

        let missing = repo.find_by_id(&Uuid::now_v7()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_account("ana@example.com", "ana"))
            .await
            .unwrap();
        let err = repo
            .create(&make_account("ana@example.com", "other"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_duplicate_username_conflicts() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_account("ana@example.com", "ana"))
            .await
            .unwrap();
        let err = repo
            .create(&make_account("other@example.com", "ana"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_identity_exists() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_account("ana@example.com", "ana"))
            .await
            .unwrap();

        assert!(repo.identity_exists("ana@example.com", "unused").await.unwrap());
        assert!(repo.identity_exists("unused@example.com", "ana").await.unwrap());
        assert!(
            !repo
                .identity_exists("other@example.com", "other")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_changes_profile_fields() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let mut account = make_account("ana@example.com", "ana");
        repo.create(&account).await.unwrap();

        account.username = "ana2".to_string();
        account.middle_name = Some("Marie".to_string());
        account.updated_at = Utc::now();
        repo.update(&account).await.unwrap();

        let found = repo.find_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(found.username, "ana2");
        assert_eq!(found.middle_name.as_deref(), Some("Marie"));
    }

    #[tokio::test]
    async fn test_update_missing_row_not_found() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let err = repo
            .update(&make_account("ghost@example.com", "ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_taken_username_conflicts() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.create(&make_account("ana@example.com", "ana"))
            .await
            .unwrap();
        let mut bela = make_account("bela@example.com", "bela");
        repo.create(&bela).await.unwrap();

        bela.username = "ana".to_string();
        let err = repo.update(&bela).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }
}
