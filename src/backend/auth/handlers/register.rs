/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Hash the password with bcrypt
 * 2. Append the user to the credential store
 * 3. Return 201 with a confirmation message
 *
 * No username uniqueness, format or password strength checks are made.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{CredentialsRequest, MessageResponse};
use crate::backend::auth::service::CredentialService;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "hunter2"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "User registered successfully!"}
/// ```
pub async fn register(
    State(credentials): State<CredentialService>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    tracing::info!("Register request for: {}", request.username);

    credentials
        .register(&request.username, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}
