//! Backend Error Module
//!
//! This module defines the error type used by handlers, middleware and the
//! credential service. Errors convert straight into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `UserNotFound` - unknown username at login (404)
//! - `InvalidCredentials` - password mismatch (403)
//! - `Unauthenticated` - no bearer token on a protected route (401)
//! - `Forbidden` - bad signature or expired token (403)
//! - `Internal` - hashing/signing primitive failure (500)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
