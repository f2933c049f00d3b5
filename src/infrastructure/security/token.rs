//! Signed access tokens (JWT, HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::SecurityError;
use crate::domain::identity::Identity;

/// Upper bound on token lifetime (one year).
pub const MAX_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a string.
    pub sub: String,
    pub username: String,
    pub user_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies access tokens with a shared secret.
///
/// Stateless: verification depends only on the secret and the token.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Creates an issuer signing with `secret`; tokens expire after `ttl_seconds`.
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64),
        }
    }

    /// Signs a token for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Signing`] if encoding fails.
    pub fn issue(&self, identity: &Identity) -> Result<String, SecurityError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            user_id: identity.user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verifies signature and expiry and returns the embedded identity.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::InvalidToken`] for malformed, tampered, or
    /// expired tokens.
    pub fn verify(&self, token: &str) -> Result<Identity, SecurityError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                SecurityError::InvalidToken
            })?;

        Ok(Identity {
            username: data.claims.username,
            user_id: data.claims.user_id,
        })
    }
}
