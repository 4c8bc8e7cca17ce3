/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login and
 * protected handlers.
 */

use serde::{Deserialize, Serialize};

/// Credentials body
///
/// Used by both `POST /auth/register` and `POST /auth/login`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    pub username: String,
    /// Plaintext password (hashed before storage, never echoed back)
    pub password: String,
}

/// Token response returned by a successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT to present as `Authorization: Bearer <token>`
    pub token: String,
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
