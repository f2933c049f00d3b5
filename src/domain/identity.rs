//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

/// Who the caller is, as proven by a verified access token.
///
/// Inserted into request extensions by the auth middleware and read by
/// handlers through `Extension<Identity>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub user_id: i64,
}

impl Identity {
    pub fn new(username: impl Into<String>, user_id: i64) -> Self {
        Self {
            username: username.into(),
            user_id,
        }
    }
}
