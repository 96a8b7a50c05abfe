//! SQLite pet repository implementation.

use petfolio_core::pet::repository::PetRepository;
use petfolio_types::error::RepositoryError;
use petfolio_types::pet::PetProfile;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `PetRepository`.
pub struct SqlitePetRepository {
    pool: DatabasePool,
}

impl SqlitePetRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain PetProfile.
struct PetRow {
    id: String,
    user_id: String,
    pet_name: String,
    pet_type: Option<String>,
    breed: Option<String>,
    age: Option<f64>,
    weight: Option<f64>,
    gender: Option<String>,
    created_at: String,
}

impl PetRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            pet_name: row.try_get("pet_name")?,
            pet_type: row.try_get("pet_type")?,
            breed: row.try_get("breed")?,
            age: row.try_get("age")?,
            weight: row.try_get("weight")?,
            gender: row.try_get("gender")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_pet(self) -> Result<PetProfile, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid pet id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(PetProfile {
            id,
            user_id: self.user_id,
            pet_name: self.pet_name,
            pet_type: self.pet_type,
            breed: self.breed,
            age: self.age,
            weight: self.weight,
            gender: self.gender,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl PetRepository for SqlitePetRepository {
    async fn create(&self, pet: &PetProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO pets (id, user_id, pet_name, pet_type, breed, age, weight, gender, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(pet.id.to_string())
        .bind(&pet.user_id)
        .bind(&pet.pet_name)
        .bind(&pet.pet_type)
        .bind(&pet.breed)
        .bind(pet.age)
        .bind(pet.weight)
        .bind(&pet.gender)
        .bind(format_datetime(&pet.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PetProfile>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM pets WHERE user_id = ? ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut pets = Vec::with_capacity(rows.len());
        for row in &rows {
            let pet_row =
                PetRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            pets.push(pet_row.into_pet()?);
        }

        Ok(pets)
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

    fn make_pet(user_id: &str, pet_name: &str, created_at: DateTime<Utc>) -> PetProfile {
        PetProfile {
            id: Uuid::now_v7(),
            user_id: user_id.to_string(),
            pet_name: pet_name.to_string(),
            pet_type: Some("dog".to_string()),
            breed: Some("aspin".to_string()),
            age: Some(3.0),
            weight: Some(12.5),
            gender: Some("male".to_string()),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_pool().await;
        let repo = SqlitePetRepository::new(pool);

        let pet = make_pet("user-1", "Bruno", Utc::now());
        repo.create(&pet).await.unwrap();

        let pets = repo.list_for_user("user-1").await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].id, pet.id);
        assert_eq!(pets[0].pet_name, "Bruno");
        assert_eq!(pets[0].age, Some(3.0));
        assert_eq!(pets[0].weight, Some(12.5));
    }

    #[tokio::test]
    async fn test_list_scopes_to_user_newest_first() {
        let pool = test_pool().await;
        let repo = SqlitePetRepository::new(pool);

        let base = Utc::now();
        repo.create(&make_pet("user-1", "Old", base - chrono::Duration::hours(2)))
            .await
            .unwrap();
        repo.create(&make_pet("user-1", "New", base))
            .await
            .unwrap();
        repo.create(&make_pet("user-2", "Rex", base))
            .await
            .unwrap();

        let pets = repo.list_for_user("user-1").await.unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].pet_name, "New");
        assert_eq!(pets[1].pet_name, "Old");
    }

    #[tokio::test]
    async fn test_optional_fields_roundtrip_as_null() {
        let pool = test_pool().await;
        let repo = SqlitePetRepository::new(pool);

        let pet = PetProfile {
            id: Uuid::now_v7(),
            user_id: "user-1".to_string(),
            pet_name: "Mimi".to_string(),
            pet_type: None,
            breed: None,
            age: None,
            weight: None,
            gender: None,
            created_at: Utc::now(),
        };
        repo.create(&pet).await.unwrap();

        let pets = repo.list_for_user("user-1").await.unwrap();
        assert_eq!(pets[0].pet_type, None);
        assert_eq!(pets[0].age, None);
        assert_eq!(pets[0].gender, None);
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let pool = test_pool().await;
        let repo = SqlitePetRepository::new(pool);

        let pets = repo.list_for_user("nobody").await.unwrap();
        assert!(pets.is_empty());
    }
}
