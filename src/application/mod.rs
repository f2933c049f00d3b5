//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and the credential primitives and
//! expose a small API for HTTP handlers. They are generic over repository
//! traits so they can be unit tested with `mockall` mocks.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login, token verification
//! - [`services::user_service::UserService`] - Profile reads and updates
//! - [`services::pet_service::PetService`] - Pet listings and adoption

pub mod services;
