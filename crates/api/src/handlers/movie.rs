//! Handlers for the `/movie` resource.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use movieflix_core::types::DbId;

use crate::dto::{MovieDto, MoviePageResponse};
use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::{PageParams, PageSortParams};
use crate::state::AppState;
use crate::upload::{self, MovieForm};

/// POST /api/v1/movie/add-movie
///
/// Multipart form with a required `file` part and a `movieDto` part holding
/// the movie as a JSON string. An empty file is rejected by the service
/// before anything is written.
pub async fn add_movie(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<MovieDto>)> {
    let MovieForm { file, movie } = upload::read_movie_form(&mut multipart).await?;
    let file = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let movie = movie.ok_or_else(missing_movie_part)?;

    let created = state.movie_service.add_movie(movie, file).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/movie/{movie_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.movie_service.get_movie(movie_id).await?;
    Ok(Json(movie))
}

/// GET /api/v1/movie/all
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.movie_service.get_all_movies().await?;
    Ok(Json(movies))
}

/// PUT /api/v1/movie/update/{movie_id}
///
/// The `file` part is optional; an absent or empty part keeps the current
/// poster.
pub async fn update(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<MovieDto>> {
    let MovieForm { file, movie } = upload::read_movie_form(&mut multipart).await?;
    let movie = movie.ok_or_else(missing_movie_part)?;
    let file = file.filter(|f| !f.is_empty());

    let updated = state
        .movie_service
        .update_movie(movie_id, movie, file)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/movie/delete/{movie_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<String> {
    state.movie_service.delete_movie(movie_id).await
}

/// GET /api/v1/movie/allMoviesPage?pageNumber=&pageSize=
pub async fn list_paged(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<MoviePageResponse>> {
    let page_number = params
        .page_number
        .unwrap_or(state.config.default_page_number);
    let page_size = params.page_size.unwrap_or(state.config.default_page_size);

    let page = state
        .movie_service
        .get_all_movies_with_pagination(page_number, page_size, None, None)
        .await?;
    Ok(Json(page))
}

/// GET /api/v1/movie/allMoviesPageSort?pageNumber=&pageSize=&sortBy=&dir=
pub async fn list_paged_sorted(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageSortParams>,
) -> AppResult<Json<MoviePageResponse>> {
    let config = &state.config;
    let page_number = params.page_number.unwrap_or(config.default_page_number);
    let page_size = params.page_size.unwrap_or(config.default_page_size);
    let sort_by = params.sort_by.as_deref().unwrap_or(&config.default_sort_by);
    let dir = params.dir.as_deref().unwrap_or(&config.default_sort_dir);

    let page = state
        .movie_service
        .get_all_movies_with_pagination(page_number, page_size, Some(sort_by), Some(dir))
        .await?;
    Ok(Json(page))
}

fn missing_movie_part() -> AppError {
    AppError::BadRequest("Missing required 'movieDto' field".into())
}
