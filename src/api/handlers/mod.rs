//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod adoption;
pub mod auth;
pub mod health;
pub mod pets;
pub mod profile;

pub use adoption::adopt_pet_handler;
pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use pets::{add_pet_handler, get_pet_handler, list_pets_handler, recent_pets_handler};
pub use profile::{get_user_id_handler, profile_handler, update_profile_handler};
