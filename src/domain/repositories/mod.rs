//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.
//!
//! - [`UserRepository`] - User accounts and profiles
//! - [`PetRepository`] - Pet listings and adoptions
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod pet_repository;
pub mod user_repository;

pub use pet_repository::PetRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
