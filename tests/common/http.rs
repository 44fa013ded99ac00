//! Request helpers for driving the router with `tower::ServiceExt::oneshot`

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

/// Status, headers and decoded JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookie: Vec<String>,
    pub body: serde_json::Value,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let set_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        Self {
            status,
            set_cookie,
            body,
        }
    }

    /// Message of an error body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// Send a request, optionally with a JSON body and a session cookie
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    TestResponse::from_response(response).await
}

pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(router, Method::GET, uri, None, cookie).await
}

pub async fn post_json(
    router: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> TestResponse {
    send(router, Method::POST, uri, Some(body), cookie).await
}

pub async fn patch_json(
    router: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> TestResponse {
    send(router, Method::PATCH, uri, Some(body), cookie).await
}

pub async fn delete(router: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(router, Method::DELETE, uri, None, cookie).await
}
