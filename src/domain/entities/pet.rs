//! Pet entity and listing projections.

use chrono::{DateTime, Utc};

/// A pet listed for adoption.
#[derive(Debug, Clone)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub owner_id: Option<i64>,
    pub image: Option<Vec<u8>>,
    pub date_added: DateTime<Utc>,
    pub adopted: bool,
}

impl Pet {
    /// Returns true if the pet can still be adopted.
    pub fn is_available(&self) -> bool {
        !self.adopted
    }

    /// Returns the image bytes, treating an empty blob as no image.
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref().filter(|bytes| !bytes.is_empty())
    }
}

/// Input data for listing a new pet.
///
/// `date_added` and `adopted` are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub owner_id: Option<i64>,
    pub image: Option<Vec<u8>>,
}

/// Public contact details of the user who listed a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// A pet joined with its owner; `owner` is `None` when the pet has no owner
/// or the owner row is missing.
#[derive(Debug, Clone)]
pub struct PetWithOwner {
    pub pet: Pet,
    pub owner: Option<OwnerSummary>,
}

/// Aggregate listing counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PetCounts {
    pub available: i64,
    pub adopted: i64,
    pub adoptions: i64,
}
