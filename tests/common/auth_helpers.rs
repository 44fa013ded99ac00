//! Authentication test helpers
//!
//! Sign users up and in through the real endpoints and carry the session
//! cookie between requests.

use axum::{http::StatusCode, Router};
use serde_json::json;

use super::http::{post_json, TestResponse};

/// Signed-in test user
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    /// `jwt=<token>`, ready for a `Cookie` header
    pub cookie: String,
}

/// Value of the `jwt` cookie set by a response, if any
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    response
        .set_cookie
        .iter()
        .find(|c| c.starts_with("jwt="))
        .map(|c| c.split(';').next().unwrap_or_default().to_string())
}

/// Sign up and sign in, panicking if either step fails
pub async fn create_test_user(router: &Router, name: &str, email: &str, password: &str) -> TestUser {
    let signup = post_json(
        router,
        "/signup",
        json!({ "name": name, "email": email, "password": password }),
        None,
    )
    .await;
    assert_eq!(signup.status, StatusCode::OK, "signup failed: {}", signup.body);

    let signin = post_json(
        router,
        "/signin",
        json!({ "email": email, "password": password }),
        None,
    )
    .await;
    assert_eq!(signin.status, StatusCode::OK, "signin failed: {}", signin.body);

    TestUser {
        id: signin.body["_id"].as_str().unwrap_or_default().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        cookie: session_cookie(&signin).expect("signin did not set the session cookie"),
    }
}
