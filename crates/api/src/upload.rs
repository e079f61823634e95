//! Multipart decoding for poster uploads and movie forms.

use axum::extract::Multipart;

use crate::dto::MovieDto;
use crate::error::{AppError, AppResult};

/// Name of the multipart part carrying the poster bytes.
pub const FILE_FIELD: &str = "file";

/// Names accepted for the JSON-encoded movie metadata part.
const MOVIE_FIELDS: &[&str] = &["movieDto", "movieDtoObj"];

/// An uploaded file held in memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename reported by the client (may be empty).
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The parts of a movie create/update request.
#[derive(Debug, Default)]
pub struct MovieForm {
    pub file: Option<UploadedFile>,
    pub movie: Option<MovieDto>,
}

/// Read a form with an optional `file` part and an optional JSON movie part.
///
/// Unknown parts are ignored.
pub async fn read_movie_form(multipart: &mut Multipart) -> AppResult<MovieForm> {
    let mut form = MovieForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == FILE_FIELD {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.file = Some(UploadedFile {
                filename,
                data: data.to_vec(),
            });
        } else if MOVIE_FIELDS.contains(&name.as_str()) {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            let movie = serde_json::from_str::<MovieDto>(&text)
                .map_err(|e| AppError::BadRequest(format!("Invalid movie metadata: {e}")))?;
            form.movie = Some(movie);
        }
    }

    Ok(form)
}

/// Read a form that must carry a `file` part.
pub async fn read_file(multipart: &mut Multipart) -> AppResult<UploadedFile> {
    read_movie_form(multipart)
        .await?
        .file
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{FILE_FIELD}' field")))
}
