//! Pet profile handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use petfolio_types::pet::{NewPet, PetProfile};

use crate::http::error::AppError;
use crate::http::extractors::body::BodyJson;
use crate::http::extractors::query::PetListQuery;
use crate::state::AppState;

/// Request body for POST /api/addPet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPetRequest {
    pub user_id: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}

/// A pet profile in wire casing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetBody {
    pub id: uuid::Uuid,
    pub user_id: String,
    pub pet_name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PetProfile> for PetBody {
    fn from(pet: PetProfile) -> Self {
        Self {
            id: pet.id,
            user_id: pet.user_id,
            pet_name: pet.pet_name,
            pet_type: pet.pet_type,
            breed: pet.breed,
            age: pet.age,
            weight: pet.weight,
            gender: pet.gender,
            created_at: pet.created_at,
        }
    }
}

/// POST /api/addPet - Record a pet profile for an owner.
pub async fn add_pet(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<AddPetRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let new_pet = NewPet {
        user_id: body.user_id.unwrap_or_default(),
        pet_name: body.pet_name.unwrap_or_default(),
        pet_type: body.pet_type,
        breed: body.breed,
        age: body.age,
        weight: body.weight,
        gender: body.gender,
    };

    state.pet_service.add_pet(new_pet).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Pet added successfully",
        })),
    ))
}

/// GET /api/pets - List an owner's pets, newest first.
pub async fn list_pets(
    State(state): State<AppState>,
    Query(query): Query<PetListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = query.user_id.unwrap_or_default();
    let pets = state.pet_service.list_pets(&user_id).await?;

    let pets: Vec<PetBody> = pets.into_iter().map(PetBody::from).collect();
    Ok(Json(json!({ "pets": pets })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    #[test]
    fn test_pet_body_serializes_wire_casing() {
        let body = PetBody::from(PetProfile {
            id: uuid::Uuid::now_v7(),
            user_id: "user-1".to_string(),
            pet_name: "Bruno".to_string(),
            pet_type: Some("dog".to_string()),
            breed: None,
            age: Some(3.0),
            weight: Some(12.5),
            gender: None,
            created_at: Utc::now(),
        });

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"userId\":\"user-1\""));
        assert!(json.contains("\"petName\":\"Bruno\""));
        assert!(json.contains("\"petType\":\"dog\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_add_pet_request_tolerates_missing_fields() {
        let body: AddPetRequest =
            serde_json::from_str(r#"{"userId": "user-1"}"#).unwrap();

        assert_eq!(body.user_id.as_deref(), Some("user-1"));
        assert!(body.pet_name.is_none());
        assert!(body.age.is_none());
    }
}
