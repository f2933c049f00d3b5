//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs live next to the
//! entity they create (`NewUser`, `NewPet`); partial writes have their own
//! types (`ProfileUpdate`).
//!
//! - [`User`] - A registered account
//! - [`Pet`] - A pet listing
//! - [`Adoption`] - The record of a pet being adopted

pub mod adoption;
pub mod pet;
pub mod user;

pub use adoption::{Adoption, AdoptionOutcome};
pub use pet::{NewPet, OwnerSummary, Pet, PetCounts, PetWithOwner};
pub use user::{NewUser, ProfileUpdate, User};
