//! Password hashing with bcrypt.

use super::SecurityError;

/// Hashes and verifies passwords with bcrypt.
///
/// bcrypt is CPU-bound, so both operations run on the blocking thread pool.
/// Each hash embeds its own random salt and cost factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost factor (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Hashing`] if bcrypt rejects the input or the
    /// blocking task fails.
    pub async fn hash(&self, password: &str) -> Result<String, SecurityError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            bcrypt::hash(password, cost).map_err(|e| SecurityError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| SecurityError::Hashing(format!("task join error: {e}")))?
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// Fails closed: a malformed hash or a failed blocking task yields `false`.
    pub async fn verify(&self, password: &str, hash: &str) -> bool {
        let password = password.to_string();
        let hash = hash.to_string();

        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;

        match result {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Stored password hash could not be verified");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
