//! User entity and its write models.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password_hash` is the bcrypt hash stored in the `users.password` column;
/// the plaintext password never leaves the auth service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub email: String,
}

/// Full overwrite of the mutable profile fields.
///
/// `username` and `email` are not part of a profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
}

impl User {
    /// Returns the user's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
