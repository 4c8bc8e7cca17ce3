/**
 * Protected Resource Handler
 *
 * GET /protected. Only reachable through the token gate middleware, which
 * has already verified the bearer token and attached the identity.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::middleware::auth::AuthUser;

/// Greet the authenticated user
pub async fn protected(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Protected resource accessed by {}", user.username);

    Json(MessageResponse::new(format!(
        "Hello {}, you have access!",
        user.username
    )))
}
