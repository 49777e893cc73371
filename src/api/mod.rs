//! API Module
//!
//! HTTP handlers and routing for the onboarding service REST API.
//!
//! # Endpoints
//! - `POST /onboarding/validate` - Validate an onboarding request body
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
