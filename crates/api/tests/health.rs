//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use movieflix_api::app;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["posters_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_is_degraded_when_poster_dir_is_unusable(pool: PgPool) {
    let posters = tempfile::tempdir().expect("create poster dir");
    let blocker = posters.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("write blocker file");

    let mut config = common::test_config(&posters);
    config.poster_dir = blocker.to_string_lossy().to_string();
    let app = common::TestApp {
        router: app::build_app(app::build_state(pool, config)),
        posters,
    };

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["posters_healthy"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
