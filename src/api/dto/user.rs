//! DTOs for profile and user lookup endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::entities::{ProfileUpdate, User};

/// Response body for `GET /api/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub email: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            address: user.address,
            contact_number: user.contact_number,
            email: user.email,
        }
    }
}

/// Request body for `PUT /api/profile/update`.
///
/// All five fields are required: the update is a full overwrite.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(required)]
    pub first_name: Option<String>,

    #[validate(required)]
    pub last_name: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(required)]
    pub age: Option<i32>,

    #[validate(required)]
    pub address: Option<String>,

    #[validate(required)]
    pub contact_number: Option<String>,
}

impl UpdateProfileRequest {
    /// Converts a validated request into a profile update.
    pub fn into_update(self) -> Option<ProfileUpdate> {
        Some(ProfileUpdate {
            first_name: self.first_name?,
            last_name: self.last_name?,
            age: self.age?,
            address: self.address?,
            contact_number: self.contact_number?,
        })
    }
}

/// Request body for `POST /api/get_user_id`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserIdRequest {
    #[validate(required)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    pub user_id: i64,
}
