//! Repository trait for pet listings and adoptions.

use crate::domain::entities::{AdoptionOutcome, NewPet, Pet, PetCounts, PetWithOwner};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pets and their adoption records.
///
/// Adoption is a single atomic write across `pets` and `adoptions`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Inserts a new pet. `date_added` defaults to now, `adopted` to false.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `owner_id` references no user.
    async fn create(&self, new_pet: NewPet) -> Result<Pet, AppError>;

    /// Finds a pet by id, adopted or not.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, AppError>;

    /// Lists the most recently added pets that are not adopted,
    /// newest first, at most `limit` rows.
    async fn list_recent_available(&self, limit: i64) -> Result<Vec<Pet>, AppError>;

    /// Lists every pet that is not adopted, joined with its owner.
    async fn list_available_with_owner(&self) -> Result<Vec<PetWithOwner>, AppError>;

    /// Adopts a pet on behalf of `adopter_id`.
    ///
    /// Runs as one transaction: locks the pet row, checks it exists and is
    /// not adopted, inserts the adoption row and flags the pet as adopted.
    /// Concurrent calls for the same pet yield exactly one
    /// [`AdoptionOutcome::Adopted`].
    async fn record_adoption(
        &self,
        pet_id: i64,
        adopter_id: i64,
    ) -> Result<AdoptionOutcome, AppError>;

    /// Returns listing counters.
    async fn counts(&self) -> Result<PetCounts, AppError>;
}
