//! Server Module
//!
//! This module contains the code for configuring, initializing and wiring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - Environment-driven `Config` struct
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - State creation, demo account seeding, app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env()` reads the environment once
//! 2. **State Creation**: token gate and credential service are built from it
//! 3. **Seeding**: the demo account is registered
//! 4. **Router Creation**: routes, middleware and static files are configured

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::Config;
pub use init::{create_app, create_state};
pub use state::AppState;
