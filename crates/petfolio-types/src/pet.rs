//! Pet profile types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored pet profile.
///
/// `user_id` is a plain string rather than a foreign key: pets may be
/// recorded against owners the backend has no account row for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetProfile {
    pub id: Uuid,
    pub user_id: String,
    pub pet_name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for adding a pet. Only `user_id` and `pet_name` are required.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub user_id: String,
    pub pet_name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}
