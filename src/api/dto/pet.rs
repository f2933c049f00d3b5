//! DTOs for pet listings and adoption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_with::{DisplayFromStr, PickFirst, base64::Base64, serde_as};
use validator::Validate;

use crate::domain::entities::{NewPet, OwnerSummary, Pet, PetWithOwner};
use crate::error::AppError;

/// Wire format of `date_added`.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn serialize_date_added<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_ADDED_FORMAT))
}

fn non_empty(image: Option<Vec<u8>>) -> Option<Vec<u8>> {
    image.filter(|bytes| !bytes.is_empty())
}

/// A single pet as returned by `GET /api/pets/{id}` and `GET /api/recent_pets`.
///
/// `image` is base64 (standard alphabet, padded) or `null`.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct PetResponse {
    pub name: String,
    pub breed: String,
    pub age: i32,
    #[serde(serialize_with = "serialize_date_added")]
    pub date_added: DateTime<Utc>,
    #[serde_as(as = "Option<Base64>")]
    pub image: Option<Vec<u8>>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            name: pet.name,
            breed: pet.breed,
            age: pet.age,
            date_added: pet.date_added,
            image: non_empty(pet.image),
        }
    }
}

/// Owner block of a pet listing. Fields are `null` when the pet has no owner.
#[derive(Debug, Default, Serialize)]
pub struct OwnerResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
}

impl From<Option<OwnerSummary>> for OwnerResponse {
    fn from(owner: Option<OwnerSummary>) -> Self {
        match owner {
            Some(owner) => Self {
                first_name: Some(owner.first_name),
                last_name: Some(owner.last_name),
                address: Some(owner.address),
            },
            None => Self::default(),
        }
    }
}

/// An entry of `GET /api/pets`.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct PetListItem {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub age: i32,
    #[serde(serialize_with = "serialize_date_added")]
    pub date_added: DateTime<Utc>,
    #[serde_as(as = "Option<Base64>")]
    pub image: Option<Vec<u8>>,
    pub owner: OwnerResponse,
}

impl From<PetWithOwner> for PetListItem {
    fn from(item: PetWithOwner) -> Self {
        let PetWithOwner { pet, owner } = item;

        Self {
            id: pet.id,
            name: pet.name,
            breed: pet.breed,
            age: pet.age,
            date_added: pet.date_added,
            image: non_empty(pet.image),
            owner: owner.into(),
        }
    }
}

/// Request body for `POST /api/adopt_pet`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct AdoptRequest {
    /// Accepts a JSON number or a numeric string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(required)]
    pub pet_id: Option<i64>,
}

/// Text fields and file collected from the `add_pet` multipart form.
#[derive(Debug, Default, Validate)]
pub struct AddPetForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub breed: Option<String>,

    #[validate(required, length(min = 1))]
    pub age: Option<String>,

    /// Empty string is treated as "no owner".
    pub owner_id: Option<String>,

    pub image: Option<Vec<u8>>,
}

impl AddPetForm {
    /// Validates presence and parses numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing or
    /// `age`/`owner_id` is not an integer.
    pub fn into_new_pet(self) -> Result<NewPet, AppError> {
        self.validate()?;

        let age = parse_field::<i32>("age", self.age.as_deref().unwrap_or_default())?;
        let owner_id = match self.owner_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_field::<i64>("owner_id", raw)?),
        };

        Ok(NewPet {
            name: self.name.unwrap_or_default(),
            breed: self.breed.unwrap_or_default(),
            age,
            owner_id,
            image: non_empty(self.image),
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::bad_request(
            format!("Field '{field}' must be an integer"),
            serde_json::json!({ "field": field, "value": raw }),
        )
    })
}
