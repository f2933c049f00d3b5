//! User profile service.

use std::sync::Arc;

use crate::domain::entities::{ProfileUpdate, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for reading and updating user profiles.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the profile of the user with `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists.
    pub async fn profile(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Overwrites the mutable profile fields of `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists.
    pub async fn update_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<(), AppError> {
        let updated = self.repository.update_profile(username, update).await?;

        if !updated {
            return Err(AppError::not_found("User not found"));
        }

        tracing::info!(username, "Profile updated");
        Ok(())
    }

    /// Resolves a username to its user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (rendered as `{"error": ...}`) if no
    /// user has that username.
    pub async fn user_id(&self, username: &str) -> Result<i64, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .map(|user| user.id)
            .ok_or_else(|| AppError::not_found_error("User not found"))
    }

    /// Counts registered users.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
