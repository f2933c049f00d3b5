//! Bearer token authentication for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Resolves `Authorization: Bearer <jwt>` into an [`Identity`] request
/// extension, or rejects the request with 401 and `WWW-Authenticate: Bearer`.
///
/// Tokens are verified statelessly (signature and `exp`); the database is not
/// consulted, so a token stays valid until it expires even if its user is gone.
/// Handlers behind this layer read the caller with `Extension<Identity>`.
///
/// [`Identity`]: crate::domain::identity::Identity
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Missing Authorization Header"))?;

    let identity = state.auth_service.authenticate(&token)?;
    tracing::debug!(user_id = identity.user_id, "Authenticated request");
    parts.extensions.insert(identity);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
