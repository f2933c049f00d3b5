//! API route configuration.
//!
//! Routes are split by whether they require a Bearer token; the caller
//! attaches [`crate::api::middleware::auth`] to the protected set.

use crate::api::handlers::{
    add_pet_handler, adopt_pet_handler, get_pet_handler, get_user_id_handler, list_pets_handler,
    login_handler, profile_handler, recent_pets_handler, register_handler, update_profile_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /register`     - Create an account
/// - `POST /login`        - Exchange credentials for a token
/// - `GET  /recent_pets`  - Five newest available pets
/// - `POST /add_pet`      - List a pet (multipart, capped at `max_upload_bytes`)
/// - `GET  /pets`         - All available pets with owners
/// - `GET  /pets/{id}`    - A single pet
/// - `POST /get_user_id`  - Resolve a username to its id
pub fn public_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/recent_pets", get(recent_pets_handler))
        .route(
            "/add_pet",
            post(add_pet_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/pets", get(list_pets_handler))
        .route("/pets/{id}", get(get_pet_handler))
        .route("/get_user_id", post(get_user_id_handler))
}

/// Routes that require a Bearer token.
///
/// # Endpoints
///
/// - `GET  /profile`         - Caller's profile
/// - `PUT  /profile/update`  - Overwrite caller's profile fields
/// - `POST /adopt_pet`       - Adopt a pet
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile_handler))
        .route("/profile/update", put(update_profile_handler))
        .route("/adopt_pet", post(adopt_pet_handler))
}
