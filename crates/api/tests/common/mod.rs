#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinelog_api::config::ServerConfig;
use cinelog_api::router::build_app_router;
use cinelog_api::state::AppState;
use cinelog_db::{DatabaseConfig, DbPool};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the given static directory.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        static_dir: static_dir.to_path_buf(),
    }
}

/// A fresh, migrated in-memory SQLite database.
pub async fn test_pool() -> DbPool {
    let config = DatabaseConfig::new("sqlite::memory:").unwrap();
    let pool = cinelog_db::create_pool(&config).await.unwrap();
    cinelog_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router over `pool`, with no static files.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_static(pool, &PathBuf::from("does-not-exist"))
}

/// Build the full application router over `pool`, serving `static_dir`.
pub fn build_test_app_with_static(pool: DbPool, static_dir: &Path) -> Router {
    build_app_router(AppState::new(pool), &test_config(static_dir))
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string()), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}
