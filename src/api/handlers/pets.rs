//! Handlers for pet listings.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::auth::MessageResponse;
use crate::api::dto::pet::{AddPetForm, PetListItem, PetResponse};
use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Lists up to five most recently added pets that are still available.
///
/// # Endpoint
///
/// `GET /api/recent_pets`
///
/// # Response
///
/// ```json
/// [
///   {
///     "name": "Rex",
///     "breed": "Beagle",
///     "age": 3,
///     "date_added": "2024-03-09 14:05:07",
///     "image": null
///   }
/// ]
/// ```
pub async fn recent_pets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetResponse>>, AppError> {
    let pets = state.pet_service.recent_pets().await?;

    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

/// Lists a new pet from a multipart form.
///
/// # Endpoint
///
/// `POST /api/add_pet`
///
/// # Form Fields
///
/// - `name`, `breed`, `age` (required)
/// - `owner_id` (optional user id)
/// - `image` (optional file)
///
/// # Response Codes
///
/// - **201 Created**: `{"msg": "Pet added successfully"}`
/// - **400 Bad Request**: Missing field, non-integer `age`/`owner_id`,
///   unknown owner, or malformed multipart body
pub async fn add_pet_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let mut form = AddPetForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => form.image = Some(field.bytes().await.map_err(multipart_error)?.to_vec()),
            "name" => form.name = Some(field.text().await.map_err(multipart_error)?),
            "breed" => form.breed = Some(field.text().await.map_err(multipart_error)?),
            "age" => form.age = Some(field.text().await.map_err(multipart_error)?),
            "owner_id" => form.owner_id = Some(field.text().await.map_err(multipart_error)?),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    state.pet_service.add_pet(form.into_new_pet()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Pet added successfully")),
    ))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::bad_request(
        "Invalid multipart body",
        json!({ "reason": e.body_text() }),
    )
}

/// Returns a single pet.
///
/// # Endpoint
///
/// `GET /api/pets/{id}`
///
/// # Errors
///
/// Returns 404 with `{"msg": "Pet not found"}`, or 400 when `id` is not an
/// integer.
pub async fn get_pet_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<PetResponse>, AppError> {
    let pet = state.pet_service.get_pet(id).await?;

    Ok(Json(pet.into()))
}

/// Lists every available pet with its owner's contact details.
///
/// # Endpoint
///
/// `GET /api/pets`
pub async fn list_pets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetListItem>>, AppError> {
    let pets = state.pet_service.available_pets().await?;

    Ok(Json(pets.into_iter().map(PetListItem::from).collect()))
}
