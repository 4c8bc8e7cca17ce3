//! Backend Module
//!
//! This module contains all server-side code for Credgate. It provides an
//! Axum HTTP server with user registration, login and a token-gated route.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, credential service, JWT token gate, handlers
//! - **`middleware`** - Bearer token verification for protected routes
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. Request arrives and is matched by the router
//! 2. `/auth/*` requests go to the credential service (register/login)
//! 3. `/protected` requests pass through the token gate middleware first
//! 4. The credential store is read or appended to
//! 5. A JSON response (or a `BackendError`) is returned

/// Server configuration, state and initialization
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: users, sessions, handlers
pub mod auth;

/// HTTP middleware
pub mod middleware;

/// Backend error types
pub mod error;
