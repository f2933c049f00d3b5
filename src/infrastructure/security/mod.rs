//! Credential primitives: password hashing and access tokens.
//!
//! - [`PasswordHasher`] - bcrypt hashing, run off the async runtime
//! - [`TokenIssuer`] - HS256 JWT issuing and verification

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::{Claims, TokenIssuer};

/// Failures raised by the credential primitives.
#[derive(Debug, thiserror::Error)]
pub enum SecurityError {
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("invalid access token")]
    InvalidToken,
}
