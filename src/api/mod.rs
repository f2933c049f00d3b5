//! HTTP surface of the service.
//!
//! [`dto`] holds wire shapes, [`extract`] wraps axum's body and path
//! extractors, [`handlers`] turn requests into service calls,
//! [`middleware`] carries bearer auth plus CORS and request tracing, and
//! [`routes`] splits endpoints into public and token-protected groups.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
