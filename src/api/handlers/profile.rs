//! Handlers for the caller's profile and username lookup.

use axum::{Extension, Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::MessageResponse;
use crate::api::dto::user::{ProfileResponse, UpdateProfileRequest, UserIdRequest, UserIdResponse};
use crate::api::extract::ApiJson;
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authenticated caller's profile.
///
/// # Endpoint
///
/// `GET /api/profile` (Bearer token required)
///
/// # Errors
///
/// - **401 Unauthorized**: Missing or invalid token
/// - **404 Not Found**: The token's user no longer exists
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state.user_service.profile(&identity.username).await?;

    Ok(Json(user.into()))
}

/// Overwrites the caller's mutable profile fields.
///
/// # Endpoint
///
/// `PUT /api/profile/update` (Bearer token required)
///
/// All of `first_name`, `last_name`, `age`, `address` and `contact_number`
/// must be present.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    let update = payload
        .into_update()
        .ok_or_else(|| AppError::bad_request("Missing or invalid fields", json!({})))?;

    state
        .user_service
        .update_profile(&identity.username, update)
        .await?;

    Ok(Json(MessageResponse::new("Profile updated successfully")))
}

/// Looks up a user's id by username.
///
/// # Endpoint
///
/// `POST /api/get_user_id`
///
/// # Errors
///
/// Returns 404 with `{"error": "User not found"}` for an unknown username.
pub async fn get_user_id_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserIdRequest>,
) -> Result<Json<UserIdResponse>, AppError> {
    payload.validate()?;

    let username = payload.username.unwrap_or_default();
    let user_id = state.user_service.user_id(&username).await?;

    Ok(Json(UserIdResponse { user_id }))
}
