//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use credgate::backend::middleware::auth_middleware;
//! use credgate::backend::server::state::AppState;
//!
//! # fn example(state: AppState) -> Router<AppState> {
//! Router::new()
//!     .route("/protected", get(credgate::backend::auth::protected))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
