//! Integration test for the root-level `/health` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
