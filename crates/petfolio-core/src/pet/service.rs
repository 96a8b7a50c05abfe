//! Pet service wrapping the repository with input validation.

use chrono::Utc;
use petfolio_types::error::PetError;
use petfolio_types::pet::{NewPet, PetProfile};
use tracing::info;
use uuid::Uuid;

use crate::pet::repository::PetRepository;

/// Validates and persists pet profiles.
pub struct PetService<P: PetRepository> {
    pets: P,
}

impl<P: PetRepository> PetService<P> {
    /// Create a new pet service with the given repository.
    pub fn new(pets: P) -> Self {
        Self { pets }
    }

    /// Add a pet profile for an owner.
    ///
    /// Only `user_id` and `pet_name` are required; the rest of the
    /// profile is stored as given.
    pub async fn add_pet(&self, new_pet: NewPet) -> Result<PetProfile, PetError> {
        if new_pet.user_id.trim().is_empty() {
            return Err(PetError::MissingField("userId"));
        }
        if new_pet.pet_name.trim().is_empty() {
            return Err(PetError::MissingField("petName"));
        }

        let pet = PetProfile {
            id: Uuid::now_v7(),
            user_id: new_pet.user_id,
            pet_name: new_pet.pet_name,
            pet_type: new_pet.pet_type,
            breed: new_pet.breed,
            age: new_pet.age,
            weight: new_pet.weight,
            gender: new_pet.gender,
            created_at: Utc::now(),
        };

        self.pets.create(&pet).await?;
        info!(pet_id = %pet.id, user_id = %pet.user_id, "Pet added");
        Ok(pet)
    }

    /// List an owner's pets, newest first.
    pub async fn list_pets(&self, user_id: &str) -> Result<Vec<PetProfile>, PetError> {
        if user_id.trim().is_empty() {
            return Err(PetError::MissingField("userId"));
        }
        Ok(self.pets.list_for_user(user_id).await?)
    }
}
