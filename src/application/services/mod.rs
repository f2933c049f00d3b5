//! Business logic services for the application layer.

pub mod auth_service;
pub mod pet_service;
pub mod user_service;

pub use auth_service::{AuthService, LoginSession, Registration};
pub use pet_service::PetService;
pub use user_service::UserService;
