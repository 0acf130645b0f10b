#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use charity_api::app::build_app;
use charity_api::config::ServerConfig;
use charity_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is unused: tests hand in a pool created by `sqlx::test`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 5,
    }
}

/// Build the full application router, including middleware, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an event through the API and return its id.
pub async fn create_event(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/events", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["eventId"].as_i64().unwrap()
}

/// A minimal valid event body.
pub fn gala_body() -> serde_json::Value {
    serde_json::json!({
        "event_name": "Gala",
        "event_date": "2030-01-01 18:00:00",
        "event_location": "Hall A",
        "category_id": 1,
        "organization_id": 1
    })
}

/// A valid registration body.
pub fn registration_body(name: &str, quantity: i64) -> serde_json::Value {
    serde_json::json!({
        "full_name": name,
        "email": "guest@example.org",
        "phone": "0400 000 000",
        "ticket_quantity": quantity
    })
}
