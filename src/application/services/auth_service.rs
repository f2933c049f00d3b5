//! Authentication service: registration, login and token verification.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::identity::Identity;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::{PasswordHasher, TokenIssuer};

/// Registration input with the plaintext password.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub email: String,
}

/// Successful login: a signed access token for the user.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

/// Service for account registration and access token handling.
///
/// Passwords are stored only as bcrypt hashes. Access tokens are stateless
/// JWTs carrying the caller's [`Identity`].
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] if hashing or the database fails.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        let password_hash = self.hasher.hash(&registration.password).await.map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Failed to register user", json!({}))
        })?;

        let new_user = NewUser {
            username: registration.username,
            password_hash,
            first_name: registration.first_name,
            last_name: registration.last_name,
            age: registration.age,
            address: registration.address,
            contact_number: registration.contact_number,
            email: registration.email,
        };
        let username = new_user.username.clone();

        let user = self
            .repository
            .create(new_user)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Username already exists",
                    json!({ "username": username }),
                ),
                other => other,
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user does not exist or the
    /// password does not match.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession, AppError> {
        let user = self.repository.find_by_username(username).await?;

        let Some(user) = user else {
            tracing::info!(username, "Login failed: unknown user");
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        if !self.hasher.verify(password, &user.password_hash).await {
            tracing::info!(username, "Login failed: wrong password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let identity = Identity::new(user.username.clone(), user.id);
        let token = self.tokens.issue(&identity).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            AppError::internal("Failed to issue token", json!({}))
        })?;

        Ok(LoginSession {
            token,
            user_id: user.id,
            username: user.username,
        })
    }

    /// Verifies an access token and returns the caller identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, tampered, or expired
    /// tokens.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        self.tokens
            .verify(token)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    fn tokens() -> TokenIssuer {
        TokenIssuer::new("test-jwt-secret", 900)
    }

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            age: 30,
            address: "1 Rabbit Hole".to_string(),
            contact_number: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn user_from(new_user: NewUser, id: i64) -> User {
        User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            age: new_user.age,
            address: new_user.address,
            contact_number: new_user.contact_number,
            email: new_user.email,
            created_at: Utc::now(),
        }
    }

    async fn stored_user(username: &str, password: &str) -> User {
        let hash = hasher().hash(password).await.unwrap();
        let new_user = NewUser {
            username: username.to_string(),
            password_hash: hash,
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            age: 30,
            address: "1 Rabbit Hole".to_string(),
            contact_number: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
        };
        user_from(new_user, 7)
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_user| new_user.password_hash != "pw1" && new_user.username == "alice")
            .times(1)
            .returning(|new_user| Ok(user_from(new_user, 1)));

        let service = AuthService::new(Arc::new(mock_repo), hasher(), tokens());

        let user = service.register(registration("alice", "pw1")).await.unwrap();

        assert_eq!(user.id, 1);
        assert!(hasher().verify("pw1", &user.password_hash).await);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), hasher(), tokens());

        let result = service.register(registration("alice", "pw1")).await;

        match result {
            Err(AppError::Conflict { message, details }) => {
                assert_eq!(message, "Username already exists");
                assert_eq!(details["username"], "alice");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let mut mock_repo = MockUserRepository::new();
        let user = stored_user("alice", "pw1").await;

        mock_repo
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), hasher(), tokens());

        let session = service.login("alice", "pw1").await.unwrap();

        assert_eq!(session.user_id, 7);
        assert_eq!(session.username, "alice");

        let identity = service.authenticate(&session.token).unwrap();
        assert_eq!(identity, Identity::new("alice", 7));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockUserRepository::new();
        let user = stored_user("alice", "pw1").await;

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), hasher(), tokens());

        let result = service.login("alice", "wrong").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), hasher(), tokens());

        let result = service.login("ghost", "pw1").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), hasher(), tokens());

        let result = service.authenticate("garbage");

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_foreign_secret() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), hasher(), tokens());
        let foreign = TokenIssuer::new("other-secret", 900)
            .issue(&Identity::new("alice", 7))
            .unwrap();

        assert!(service.authenticate(&foreign).is_err());
    }
}
