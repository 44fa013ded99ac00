//! Authentication API integration tests
//!
//! Signup, signin and signout through the HTTP surface.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use bitfilms::shared::messages;

use crate::common::{create_test_user, get, post_json, send, session_cookie, TestApp};

#[tokio::test]
async fn test_signup_returns_user_without_password() {
    let app = TestApp::new().await;

    let response = post_json(
        &app.router,
        "/signup",
        json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" }),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let user = response.body.as_object().expect("user object");
    let mut keys: Vec<&str> = user.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["_id", "email", "name"]);
    assert_eq!(response.body["name"], "Ann");
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(response.body["_id"].as_str().map(str::len), Some(24));
    assert!(response.set_cookie.is_empty());
}

#[tokio::test]
async fn test_signup_same_email_twice_conflicts() {
    let app = TestApp::new().await;
    let body = json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" });

    let first = post_json(&app.router, "/signup", body.clone(), None).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = post_json(&app.router, "/signup", body, None).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.message(), messages::USER_EMAIL_TAKEN);

    let other_fields = post_json(
        &app.router,
        "/signup",
        json!({ "name": "Someone", "email": "a@x.com", "password": "another" }),
        None,
    )
    .await;
    assert_eq!(other_fields.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_invalid_body() {
    let app = TestApp::new().await;

    let bad_email = post_json(
        &app.router,
        "/signup",
        json!({ "name": "Ann", "email": "not-an-email", "password": "secret1" }),
        None,
    )
    .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.message(), messages::INVALID_EMAIL);

    let missing_password = post_json(
        &app.router,
        "/signup",
        json!({ "name": "Ann", "email": "a@x.com" }),
        None,
    )
    .await;
    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);

    let short_name = post_json(
        &app.router,
        "/signup",
        json!({ "name": "A", "email": "a@x.com", "password": "secret1" }),
        None,
    )
    .await;
    assert_eq!(short_name.status, StatusCode::BAD_REQUEST);
    assert_eq!(short_name.message(), messages::USER_CREATE_INVALID);
}

#[tokio::test]
async fn test_signin_sets_session_cookie() {
    let app = TestApp::new().await;
    post_json(
        &app.router,
        "/signup",
        json!({ "name": "Ann", "email": "a@x.com", "password": "secret1" }),
        None,
    )
    .await;

    let response = post_json(
        &app.router,
        "/signin",
        json!({ "email": "a@x.com", "password": "secret1" }),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_id"].as_str().map(str::len), Some(24));

    let header = response
        .set_cookie
        .iter()
        .find(|c| c.starts_with("jwt="))
        .expect("session cookie");
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=None"));
    assert!(header.contains("Max-Age=604800"));
}

#[tokio::test]
async fn test_wrong_password_matches_unknown_email() {
    let app = TestApp::new().await;
    create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let wrong_password = post_json(
        &app.router,
        "/signin",
        json!({ "email": "a@x.com", "password": "wrong-password" }),
        None,
    )
    .await;
    let unknown_email = post_json(
        &app.router,
        "/signin",
        json!({ "email": "nobody@x.com", "password": "secret1" }),
        None,
    )
    .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.message(), messages::WRONG_CREDENTIALS);
    assert!(wrong_password.set_cookie.is_empty());
}

#[tokio::test]
async fn test_signout_clears_cookie() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let response = get(&app.router, "/signout", Some(&user.cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), messages::SIGNED_OUT);
    assert_eq!(session_cookie(&response).as_deref(), Some("jwt="));
    assert!(response.set_cookie.iter().any(|c| c.contains("Max-Age=0")));

    // The browser drops the cookie; the next request carries none
    let me = get(&app.router, "/users/me", None).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(me.message(), messages::AUTH_REQUIRED);
}

#[tokio::test]
async fn test_signout_without_session() {
    let app = TestApp::new().await;
    let response = get(&app.router, "/signout", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unmatched_route_is_not_found() {
    let app = TestApp::new().await;
    let response = get(&app.router, "/no/such/page", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), messages::PAGE_NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_gets_json_not_found() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let put_me = send(&app.router, Method::PUT, "/users/me", None, Some(&user.cookie)).await;
    assert_eq!(put_me.status, StatusCode::NOT_FOUND);
    assert_eq!(put_me.body, json!({ "message": messages::PAGE_NOT_FOUND }));

    let post_signout = send(&app.router, Method::POST, "/signout", None, None).await;
    assert_eq!(post_signout.status, StatusCode::NOT_FOUND);
    assert_eq!(post_signout.body, json!({ "message": messages::PAGE_NOT_FOUND }));
}
