//! Property-based tests for the credential flow

mod common;

use axum::http::StatusCode;
use common::{auth_header, TestApp};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn test_register_then_login_yields_token(
        username in "[a-zA-Z0-9_.@-]{1,24}",
        password in "[ -~]{1,40}",
    ) {
        let (registered, logged_in, greeting) = runtime().block_on(async {
            let app = TestApp::new().await;
            let (registered, _) = app.register(&username, &password).await;
            let (logged_in, body) = app.login(&username, &password).await;
            let token = body["token"].as_str().unwrap_or_default().to_string();
            let (_, greeting) = app.protected(Some(&auth_header(&token))).await;
            (registered, logged_in, greeting)
        });

        prop_assert_eq!(registered, StatusCode::CREATED);
        prop_assert_eq!(logged_in, StatusCode::OK);
        prop_assert_eq!(
            greeting["message"].as_str().unwrap_or_default(),
            format!("Hello {}, you have access!", username)
        );
    }

    #[test]
    fn test_wrong_password_never_logs_in(
        password in "[a-z]{1,16}",
        suffix in "[A-Z0-9]{1,4}",
    ) {
        let status = runtime().block_on(async {
            let app = TestApp::new().await;
            app.register("alice", &password).await;
            let wrong = format!("{}{}", password, suffix);
            app.login("alice", &wrong).await.0
        });

        prop_assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
