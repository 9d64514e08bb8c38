//! API Module
//!
//! HTTP handlers and routing for the demo user service.
//!
//! # Endpoints
//! - `GET /users/:id` - Look a user up by id (cached under the `USERS` namespace)
//! - `GET /users/search?team=&name=` - Look a user up by team and name
//! - `GET /stats` - Store statistics and repository lookup count
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
