//! Shared test harness: builds the real application router over a per-test
//! database and sends requests through tower's `oneshot` without a TCP
//! listener.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mediarack::{app_router, ensure_media_table, AppState};

/// Build the application router with the given pool, creating the media
/// table first (mirrors the bootstrap in `main.rs`).
pub async fn build_test_app(pool: PgPool) -> Router {
    ensure_media_table(&pool).await.expect("create media table");
    app_router(AppState { pool })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Create an item and return its generated id.
pub async fn seed_item(pool: &PgPool, title: &str, year: i32, genre: &str) -> i64 {
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/media",
        serde_json::json!({"title": title, "release_year": year, "genre": genre}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id_media"].as_i64().unwrap()
}
