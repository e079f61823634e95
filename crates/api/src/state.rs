use std::sync::Arc;

use movieflix_core::blob_store::BlobStore;

use crate::config::ServerConfig;
use crate::service::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: movieflix_db::DbPool,
    /// Server configuration (paging defaults are read by handlers).
    pub config: Arc<ServerConfig>,
    /// Poster files, served directly by the `/file` routes.
    pub blob_store: BlobStore,
    pub movie_service: Arc<MovieService>,
}
