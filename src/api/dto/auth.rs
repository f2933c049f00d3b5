//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::application::services::{LoginSession, Registration};

/// Request body for `POST /api/register`.
///
/// Every field is required; presence is checked by `validator` so a missing
/// field answers 400 instead of a deserialization failure.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,

    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,

    /// Accepts a JSON number or a numeric string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(required)]
    pub age: Option<i32>,

    #[validate(required, length(min = 1))]
    pub address: Option<String>,

    #[validate(required, length(min = 1))]
    pub contact_number: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl RegisterRequest {
    /// Converts a validated request into the service input.
    ///
    /// Returns `None` if a required field is absent; call `validate()` first.
    pub fn into_registration(self) -> Option<Registration> {
        Some(Registration {
            username: self.username?,
            password: self.password?,
            first_name: self.first_name?,
            last_name: self.last_name?,
            age: self.age?,
            address: self.address?,
            contact_number: self.contact_number?,
            email: self.email?,
        })
    }
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required)]
    pub username: Option<String>,

    #[validate(required)]
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl From<LoginSession> for LoginResponse {
    fn from(session: LoginSession) -> Self {
        Self {
            token: session.token,
            user_id: session.user_id,
            username: session.username,
        }
    }
}

/// Plain `{"msg": ...}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

impl MessageResponse {
    pub fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
