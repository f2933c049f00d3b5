//! Pet listing and adoption service.

use std::sync::Arc;

use crate::domain::entities::{Adoption, AdoptionOutcome, NewPet, Pet, PetCounts, PetWithOwner};
use crate::domain::identity::Identity;
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

/// Number of pets shown in the "recently added" listing.
pub const RECENT_PETS_LIMIT: i64 = 5;

/// Service for pet listings and adoptions.
pub struct PetService<R: PetRepository> {
    repository: Arc<R>,
}

impl<R: PetRepository> PetService<R> {
    /// Creates a new pet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the most recently added pets that are still available.
    ///
    /// Never returns more than [`RECENT_PETS_LIMIT`] pets.
    pub async fn recent_pets(&self) -> Result<Vec<Pet>, AppError> {
        self.repository
            .list_recent_available(RECENT_PETS_LIMIT)
            .await
    }

    /// Lists a new pet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `owner_id` references no user.
    pub async fn add_pet(&self, new_pet: NewPet) -> Result<Pet, AppError> {
        let pet = self.repository.create(new_pet).await?;

        tracing::info!(
            pet_id = pet.id,
            owner_id = ?pet.owner_id,
            has_image = pet.image_bytes().is_some(),
            "Pet added"
        );

        Ok(pet)
    }

    /// Returns a pet by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pet has that id.
    pub async fn get_pet(&self, id: i64) -> Result<Pet, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found"))
    }

    /// Lists all available pets with their owners.
    pub async fn available_pets(&self) -> Result<Vec<PetWithOwner>, AppError> {
        self.repository.list_available_with_owner().await
    }

    /// Adopts a pet for the authenticated caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pet does not exist.
    /// Returns [`AppError::AlreadyAdopted`] if someone adopted it first.
    pub async fn adopt(&self, pet_id: i64, adopter: &Identity) -> Result<Adoption, AppError> {
        match self
            .repository
            .record_adoption(pet_id, adopter.user_id)
            .await?
        {
            AdoptionOutcome::Adopted(adoption) => {
                tracing::info!(
                    pet_id,
                    adopter_id = adopter.user_id,
                    adopter = %adopter.username,
                    "Pet adopted"
                );
                Ok(adoption)
            }
            AdoptionOutcome::PetNotFound => Err(AppError::not_found("Pet not found")),
            AdoptionOutcome::AlreadyAdopted => Err(AppError::AlreadyAdopted { pet_id }),
        }
    }

    /// Returns listing counters.
    pub async fn counts(&self) -> Result<PetCounts, AppError> {
        self.repository.counts().await
    }
}
