//! Handler for pet adoption.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::MessageResponse;
use crate::api::dto::pet::AdoptRequest;
use crate::api::extract::ApiJson;
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Adopts a pet for the authenticated caller.
///
/// # Endpoint
///
/// `POST /api/adopt_pet` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "pet_id": 3 }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: `{"msg": "Pet adopted successfully"}`
/// - **400 Bad Request**: `{"msg": "Pet is already adopted"}` or missing `pet_id`
/// - **404 Not Found**: `{"msg": "Pet not found"}`
pub async fn adopt_pet_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ApiJson(payload): ApiJson<AdoptRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    payload.validate()?;

    let pet_id = payload.pet_id.unwrap_or_default();
    state.pet_service.adopt(pet_id, &identity).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Pet adopted successfully")),
    ))
}
