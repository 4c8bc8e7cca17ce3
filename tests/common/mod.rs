//! Common test utilities and helpers
//!
//! Builds the real router against a scratch static directory and drives it
//! in-process with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use credgate::backend::server::{config::Config, init::create_state, state::AppState};
use credgate::backend::routes::create_router;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const LOGIN_PAGE: &str = "<html><body>login page</body></html>";

/// A running app plus the scratch directory backing its static files
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _static_dir: TempDir,
}

pub fn test_config(static_dir: &std::path::Path) -> Config {
    let static_dir = static_dir.to_string_lossy().to_string();
    Config::from_lookup(move |key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "JWT_EXPIRES_IN" => Some("1h".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        "STATIC_DIR" => Some(static_dir.clone()),
        _ => None,
    })
    .expect("test config")
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("login.html"), LOGIN_PAGE).expect("write login page");
        std::fs::write(dir.path().join("app.css"), "body { color: black; }").expect("write css");

        let state = create_state(test_config(dir.path()))
            .await
            .expect("create state");
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _static_dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, bytes.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.send(request).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, serde_json::Value) {
        self.send_json(credentials_request("/auth/register", username, password))
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, serde_json::Value) {
        self.send_json(credentials_request("/auth/login", username, password))
            .await
    }

    pub async fn protected(&self, authorization: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(Method::GET).uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send_json(builder.body(Body::empty()).expect("request"))
            .await
    }
}

pub fn credentials_request(uri: &str, username: &str, password: &str) -> Request<Body> {
    let body = serde_json::json!({ "username": username, "password": password });
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
