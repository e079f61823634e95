//! Route definitions for poster files.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Routes mounted at `/file` (root level, NOT under `/api/v1`).
///
/// ```text
/// POST   /upload                    -> upload
/// GET    /{filename}                -> serve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(file::upload))
        .route("/{filename}", get(file::serve))
}
