/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The read-only configuration
 * - The credential service (which owns the credential store)
 * - The token gate
 *
 * Every field is a cheap clone of shared data, so handlers can extract
 * just the piece they need with `State<T>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::CredentialService;
use crate::backend::auth::sessions::TokenGate;
use crate::backend::auth::users::CredentialStore;
use crate::backend::server::config::Config;

/// Central state container for the Axum application
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration, read-only after startup
    pub config: Arc<Config>,
    /// Registration and login
    pub credentials: CredentialService,
    /// Token issuance and validation
    pub tokens: TokenGate,
}

impl AppState {
    /// Wire the components together from a configuration
    ///
    /// The credential store starts empty.
    pub fn new(config: Config) -> Self {
        let tokens = TokenGate::new(&config);
        let credentials = CredentialService::new(CredentialStore::new(), tokens.clone(), &config);

        Self {
            config: Arc::new(config),
            credentials,
            tokens,
        }
    }
}

impl FromRef<AppState> for CredentialService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for TokenGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
