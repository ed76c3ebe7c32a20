//! Router-level tests for paths that never reach the database.
//!
//! The pool is created lazily, so no connection is attempted unless a
//! handler actually runs a query. Validation and routing failures all
//! short-circuit before that.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use rosterd_server::{build_router, AppState};

fn app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/rosterd-test")
        .expect("lazy pool");
    build_router(AppState { pool })
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_says_hello_world() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Hello World");
}

#[tokio::test]
async fn health_is_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn oversized_limit_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/heroes?set_limit=9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "set_limit must be at most 4");
}

#[tokio::test]
async fn oversized_offset_is_rejected_for_teams_too() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/teams?set_offset=9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_pagination_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/heroes?set_limit=lots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_hero_missing_field_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/heroes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Deadpond"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_hero_empty_name_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/heroes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "  ", "secret_name": "Dive Wilson"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "name cannot be empty");
}

#[tokio::test]
async fn patch_hero_empty_name_is_rejected_before_lookup() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/heroes/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
