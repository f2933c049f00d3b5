//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, PetService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgPetRepository, PgUserRepository};
use crate::infrastructure::security::{PasswordHasher, TokenIssuer};

/// Immutable per-process state: services wired to the PostgreSQL repositories.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub pet_service: Arc<PetService<PgPetRepository>>,
}

impl AppState {
    /// Wires repositories and services for `pool`.
    pub fn new(pool: Arc<PgPool>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let pet_repository = Arc::new(PgPetRepository::new(pool));

        Self {
            auth_service: Arc::new(AuthService::new(user_repository.clone(), hasher, tokens)),
            user_service: Arc::new(UserService::new(user_repository)),
            pet_service: Arc::new(PetService::new(pet_repository)),
        }
    }

    /// Builds state from the loaded configuration.
    pub fn from_config(pool: Arc<PgPool>, config: &Config) -> Self {
        Self::new(
            pool,
            PasswordHasher::new(config.auth.bcrypt_cost),
            TokenIssuer::new(&config.auth.jwt_secret, config.auth.jwt_ttl_seconds),
        )
    }
}
