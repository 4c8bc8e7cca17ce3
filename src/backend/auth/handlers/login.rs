/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username (first match wins)
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return the token
 *
 * # Responses
 *
 * - 200 `{"token": "..."}` on success
 * - 404 when the username is unknown
 * - 403 when the password is wrong
 *
 * The issued token is never logged.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{CredentialsRequest, TokenResponse};
use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "hunter2"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(credentials): State<CredentialService>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let token = credentials
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
