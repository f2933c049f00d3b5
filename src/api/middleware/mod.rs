//! HTTP middleware for request processing.
//!
//! Provides authentication, cross-origin policy, and observability middleware.

pub mod auth;
pub mod cors;
pub mod tracing;
