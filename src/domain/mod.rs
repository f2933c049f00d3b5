//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`].
//!
//! - [`entities`] - Users, pets and adoptions
//! - [`identity`] - Authenticated caller identity
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod identity;
pub mod repositories;
