//! Models for the demo user service
//!
//! The cached record type plus HTTP request and response bodies.

pub mod responses;
pub mod user;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
pub use user::{SearchQuery, User};
