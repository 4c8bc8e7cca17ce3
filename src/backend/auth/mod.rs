//! Authentication Module
//!
//! This module handles user registration, credential verification and
//! access token issuance/validation.
//!
//! # Architecture
//!
//! - **`users`** - User records and the in-memory credential store
//! - **`service`** - Credential service: register and login
//! - **`sessions`** - Token gate: JWT issuance and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → password hashed → record appended
//! 2. **Login**: username and password → record found → hash verified → JWT returned
//! 3. **Protected**: bearer JWT → signature and expiry verified → identity extracted
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless; nothing is kept server-side
//! - Issued tokens are not written to the log
//!
//! Usernames are not unique. A second registration with the same name is
//! stored alongside the first, and login always resolves to the first record.

/// User records and credential store
pub mod users;

/// Credential service
pub mod service;

/// JWT token gate
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, protected, register};
pub use service::CredentialService;
pub use sessions::{Claims, TokenGate};
pub use users::{CredentialStore, UserRecord};
