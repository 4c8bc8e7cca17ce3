/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers and
 * middleware can return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Invalid credentials!",
 *   "status": 403
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = BackendError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "User not found!");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_unauthenticated_response() {
        let response = BackendError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
