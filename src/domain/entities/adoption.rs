//! Adoption record and the outcome of an adoption attempt.

use chrono::{DateTime, Utc};

/// Immutable record linking a pet to the user who adopted it.
#[derive(Debug, Clone)]
pub struct Adoption {
    pub id: i64,
    pub pet_id: i64,
    pub adopter_id: i64,
    pub adopted_at: DateTime<Utc>,
}

/// Result of a single adoption attempt.
#[derive(Debug, Clone)]
pub enum AdoptionOutcome {
    Adopted(Adoption),
    PetNotFound,
    AlreadyAdopted,
}
