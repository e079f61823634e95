//! Handlers for the `/file` resource (raw poster upload and download).

use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use movieflix_core::error::CoreError;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;
use crate::upload;

/// Posters are always served with this content type.
const POSTER_CONTENT_TYPE: &str = "image/png";

/// POST /file/upload
///
/// Stores the `file` part under its original name, overwriting any file of
/// the same name.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<String> {
    let file = upload::read_file(&mut multipart).await?;
    if file.is_empty() {
        return Err(CoreError::EmptyFile("File is empty! Please send another file.".into()).into());
    }

    let filename = state.blob_store.store(&file.filename, &file.data).await?;
    tracing::info!(filename = %filename, bytes = file.data.len(), "Poster uploaded");
    Ok(format!("File uploaded: {filename}"))
}

/// GET /file/{filename}
pub async fn serve(
    State(state): State<AppState>,
    AppPath(filename): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let bytes = state.blob_store.retrieve(&filename).await?;
    Ok(([(CONTENT_TYPE, POSTER_CONTENT_TYPE)], bytes))
}
