/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the authentication flow.
 * Every variant is terminal: it is returned to the caller as an HTTP
 * status with a short message and the server keeps serving.
 *
 * # Error Categories
 *
 * ## Credential Errors
 *
 * Raised by the credential service at login:
 * - Unknown username
 * - Password does not match the stored hash
 *
 * ## Token Errors
 *
 * Raised by the token gate on protected routes:
 * - No bearer token presented
 * - Token signature invalid, token malformed or expired
 *
 * ## Internal Errors
 *
 * Failures of the hashing or signing primitives, or of the blocking
 * task that runs them.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use credgate::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::InvalidCredentials;
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
///
/// let err = BackendError::internal("hash failed");
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// No user record matches the username given at login
    #[error("User not found!")]
    UserNotFound,

    /// The user exists but the password does not verify against its hash
    #[error("Invalid credentials!")]
    InvalidCredentials,

    /// A protected route was requested without a bearer token
    #[error("Access token required")]
    Unauthenticated,

    /// The presented token failed signature or expiry checks
    #[error("Invalid or expired token")]
    Forbidden,

    /// Hashing, signing or task execution failed
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new internal error
    ///
    /// # Example
    ///
    /// ```rust
    /// use credgate::backend::error::BackendError;
    ///
    /// let err = BackendError::internal("Failed to sign token");
    /// ```
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `UserNotFound` - 404 Not Found
    /// - `InvalidCredentials` - 403 Forbidden
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::FORBIDDEN,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent back to the client
    ///
    /// Internal errors hide their detail; it is logged where the error is raised.
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } => "Server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Blocking task failed: {}", err))
    }
}
