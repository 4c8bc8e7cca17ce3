//! Credgate - Main Library
//!
//! Credgate is a small username/password authentication service built on Axum.
//! Users register with a password that is hashed with bcrypt, log in to obtain a
//! signed JWT, and present that token as a bearer credential to reach the
//! protected endpoint.
//!
//! # Module Structure
//!
//! - **`backend`** - Everything the server needs
//!   - Configuration, application state and bootstrap
//!   - Credential store, credential service and token gate
//!   - HTTP handlers, middleware and routing
//!   - Error types and their HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use credgate::backend::server::{config::Config, init::create_app};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let port = config.port;
//! let app = create_app(config).await?;
//!
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;

pub use backend::error::BackendError;
pub use backend::server::config::{Config, ConfigError};
