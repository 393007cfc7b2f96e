//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot` without
//! a TCP listener, against the same middleware stack production uses.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use readstack_api::config::ServerConfig;
use readstack_api::router::build_app_router;
use readstack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uploads land in a per-process directory under the system temp dir so
/// parallel test binaries do not interfere.
pub fn test_config() -> ServerConfig {
    test_config_with_uploads(
        std::env::temp_dir().join(format!("readstack-test-uploads-{}", std::process::id())),
    )
}

/// Build a test `ServerConfig` with an explicit upload directory.
pub fn test_config_with_uploads(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the application router with a custom config (e.g. a tempdir for
/// uploads the test wants to inspect).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

/// GET without a session.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    send(app, request).await
}

/// GET with an `x-user-id` session header.
pub async fn get_as(app: Router, uri: &str, user_id: i64) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .body(Body::empty())
        .expect("request builds");
    send(app, request).await
}

/// POST a JSON body without a session.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");
    send(app, request).await
}

/// PUT a JSON body with an `x-user-id` session header.
pub async fn put_json_as(
    app: Router,
    uri: &str,
    user_id: i64,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");
    send(app, request).await
}

/// DELETE with an `x-user-id` session header.
pub async fn delete_as(app: Router, uri: &str, user_id: i64) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .body(Body::empty())
        .expect("request builds");
    send(app, request).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "readstack-test-boundary";

/// Hand-rolled multipart/form-data body for book create/update requests.
///
/// `fields` are plain text parts; `file` is an optional
/// `(filename, content_type, bytes)` part named `pdf`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, content_type, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"pdf\"; filename=\"{filename}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Send a multipart request (POST or PUT) with a session header.
pub async fn send_multipart_as(
    app: Router,
    method: &str,
    uri: &str,
    user_id: i64,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Response<Body> {
    let (content_type, body) = multipart_body(fields, file);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .header("content-type", content_type)
        .body(Body::from(body))
        .expect("request builds");
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an account through the API and return its id.
pub async fn signup_user(pool: &PgPool, email: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/auth/signup",
        serde_json::json!({
            "email": email,
            "password": "a-long-enough-password",
            "name": "Test User",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("signup returns an id")
}

/// Create a book through the API for `user_id` and return its JSON.
pub async fn create_book(
    pool: &PgPool,
    user_id: i64,
    title: &str,
    author: &str,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = send_multipart_as(
        app,
        "POST",
        "/books",
        user_id,
        &[("title", title), ("author", author)],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
