use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether Postgres answers `SELECT 1`.
    pub db_healthy: bool,
    /// Whether the poster directory exists (or could be created).
    pub posters_healthy: bool,
}

/// GET /health
///
/// Checks the catalog database and the poster directory. Always answers 200 so
/// load balancers can read the body; `status` carries the verdict.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = movieflix_db::health_check(&state.pool).await.is_ok();

    let posters_healthy = match state.blob_store.ensure_root().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, dir = %state.blob_store.root().display(), "Poster directory unavailable");
            false
        }
    };

    let status = if db_healthy && posters_healthy {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        posters_healthy,
    })
}

/// Mount the health route at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
