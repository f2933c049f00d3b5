//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and hosts the
//! credential primitives.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - Password hashing and access token signing

pub mod persistence;
pub mod security;
