//! DTOs for `GET /health`.

use serde::Serialize;

/// Outcome of one component check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeState {
    Ok,
    Error,
}

/// Result of probing one component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: ProbeState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ProbeState::Ok,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProbeState::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProbeState::Ok
    }
}

/// Probes run by the health endpoint. Only the database is checked.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Body of the health endpoint: `"healthy"` or `"degraded"`, the crate
/// version, and per-component results.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn from_checks(checks: HealthChecks) -> Self {
        Self {
            status: if checks.database.is_ok() {
                "healthy"
            } else {
                "degraded"
            },
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.database.is_ok()
    }
}
