//! Profile API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use bitfilms::backend::auth::SessionKeys;
use bitfilms::shared::{messages, ObjectId};

use crate::common::{create_test_user, get, patch_json, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let response = get(&app.router, "/users/me", Some(&user.cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "_id": user.id, "name": "Ann", "email": "a@x.com" })
    );
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;
    let token = user.cookie.trim_start_matches("jwt=");

    let request = axum::http::Request::builder()
        .uri("/users/me")
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let app = TestApp::new().await;

    let forged = SessionKeys::new("some-other-secret")
        .issue(&ObjectId::generate())
        .unwrap();
    let response = get(&app.router, "/users/me", Some(&format!("jwt={}", forged))).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let garbage = get(&app.router, "/users/me", Some("jwt=not.a.token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;
    let id = ObjectId::parse(&user.id).unwrap();

    let eight_days_ago = chrono::Utc::now().timestamp() - 8 * 24 * 60 * 60;
    let stale = SessionKeys::new(TEST_SECRET).issue_at(&id, eight_days_ago).unwrap();

    let response = get(&app.router, "/users/me", Some(&format!("jwt={}", stale))).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_vanished_user() {
    let app = TestApp::new().await;
    let token = SessionKeys::new(TEST_SECRET).issue(&ObjectId::generate()).unwrap();

    let response = get(&app.router, "/users/me", Some(&format!("jwt={}", token))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), messages::USER_NOT_FOUND);
}

#[tokio::test]
async fn test_update_me() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let response = patch_json(
        &app.router,
        "/users/me",
        json!({ "name": "Anna", "email": "anna@x.com" }),
        Some(&user.cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "_id": user.id, "name": "Anna", "email": "anna@x.com" })
    );

    let me = get(&app.router, "/users/me", Some(&user.cookie)).await;
    assert_eq!(me.body["email"], "anna@x.com");
}

#[tokio::test]
async fn test_update_me_to_taken_email() {
    let app = TestApp::new().await;
    create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;
    let bob = create_test_user(&app.router, "Bob", "b@x.com", "secret2").await;

    let response = patch_json(
        &app.router,
        "/users/me",
        json!({ "name": "Bob", "email": "a@x.com" }),
        Some(&bob.cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), messages::USER_EMAIL_TAKEN);
}

#[tokio::test]
async fn test_update_me_invalid_name() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.router, "Ann", "a@x.com", "secret1").await;

    let response = patch_json(
        &app.router,
        "/users/me",
        json!({ "name": "A", "email": "a@x.com" }),
        Some(&user.cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), messages::USER_UPDATE_INVALID);
}

#[tokio::test]
async fn test_update_me_requires_session() {
    let app = TestApp::new().await;
    let response = patch_json(
        &app.router,
        "/users/me",
        json!({ "name": "Anna", "email": "anna@x.com" }),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
