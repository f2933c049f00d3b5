//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and named-column row mapping (`sqlx::FromRow`).
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts and profiles
//! - [`PgPetRepository`] - Pet listings and transactional adoption

pub mod pg_pet_repository;
pub mod pg_user_repository;

pub use pg_pet_repository::PgPetRepository;
pub use pg_user_repository::PgUserRepository;
