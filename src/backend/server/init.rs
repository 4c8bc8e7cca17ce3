/**
 * Server Initialization
 *
 * This module builds the application state, preloads the demonstration
 * account and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Build the token gate and credential service from `Config`
 * 2. Register the demo account through the normal registration path
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Create the application state with the demo account already registered
pub async fn create_state(config: Config) -> Result<AppState, BackendError> {
    let state = AppState::new(config);

    let username = state.config.demo_username.clone();
    let password = state.config.demo_password.clone();
    state.credentials.register(&username, &password).await?;
    tracing::info!("Default user added: {}", username);

    Ok(state)
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only if the demo account cannot be hashed, which aborts startup.
pub async fn create_app(config: Config) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing credgate server");

    let state = create_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");

    Ok(app)
}
