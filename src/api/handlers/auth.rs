//! Handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "alice",
///   "password": "pw1",
///   "first_name": "Alice",
///   "last_name": "Liddell",
///   "age": 30,
///   "address": "1 Rabbit Hole",
///   "contact_number": "555-0100",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: `{"msg": "User registered successfully"}`
/// - **400 Bad Request**: Missing, empty or wrongly typed field, or username
///   already taken
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    payload.validate()?;

    let registration = payload
        .into_registration()
        .ok_or_else(|| AppError::bad_request("Missing or invalid fields", json!({})))?;

    state.auth_service.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Exchanges credentials for an access token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiJ9...",
///   "user_id": 1,
///   "username": "alice"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 with `{"msg": "Invalid credentials"}` for an unknown user or a
/// wrong password; the two cases are indistinguishable to the caller.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::bad_request("Missing or invalid fields", json!({})));
    };

    let session = state.auth_service.login(&username, &password).await?;

    Ok(Json(session.into()))
}
