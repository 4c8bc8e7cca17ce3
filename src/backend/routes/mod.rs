//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, static files
//! └── api_routes.rs   - Auth and protected endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /` - Login page
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - User login
//! - `GET /protected` - Token-gated greeting
//! - anything else - Static file from the configured directory, or 404

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
