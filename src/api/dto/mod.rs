//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for presence checks on request bodies.

pub mod auth;
pub mod health;
pub mod pet;
pub mod user;
