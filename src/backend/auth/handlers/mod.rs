//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Handler exports
//! ├── types.rs      - Request and response types
//! ├── register.rs   - User registration handler
//! ├── login.rs      - User authentication handler
//! └── protected.rs  - Token-gated greeting
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - User authentication, returns a JWT
//! - **`protected`** - GET /protected - Requires a bearer token

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Protected resource handler
pub mod protected;

pub use types::{CredentialsRequest, MessageResponse, TokenResponse};

pub use login::login;
pub use protected::protected;
pub use register::register;
