//! Handler for the liveness/readiness check.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// `GET /health` answers 200 with `"status": "healthy"` when a trivial query
/// succeeds and 503 with `"status": "degraded"` otherwise. The body has the
/// same shape in both cases:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "message": "12 users" } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.user_service.count().await {
        Ok(users) => CheckStatus::ok(format!("{users} users")),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            CheckStatus::error("database unreachable")
        }
    };

    let response = HealthResponse::from_checks(HealthChecks { database });
    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
