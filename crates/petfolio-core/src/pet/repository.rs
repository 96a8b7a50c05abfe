//! PetRepository trait definition.

use petfolio_types::error::RepositoryError;
use petfolio_types::pet::PetProfile;

/// Repository trait for pet profile persistence.
///
/// Implementations live in petfolio-infra (e.g., `SqlitePetRepository`).
pub trait PetRepository: Send + Sync {
    /// Persist a new pet profile.
    fn create(
        &self,
        pet: &PetProfile,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List pets for an owner, newest first.
    fn list_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PetProfile>, RepositoryError>> + Send;
}
