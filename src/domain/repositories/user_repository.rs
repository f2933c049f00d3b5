//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Overwrites the mutable profile fields of the user with `username`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a user row was updated
    /// - `Ok(false)` if no user has that username
    async fn update_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<bool, AppError>;

    /// Lists users ordered by id, newest first, up to `limit` rows.
    async fn list(&self, limit: i64) -> Result<Vec<User>, AppError>;

    /// Counts registered users.
    async fn count(&self) -> Result<i64, AppError>;
}
