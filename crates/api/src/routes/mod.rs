pub mod file;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movie/add-movie                  create (multipart)
/// /movie/all                        list all
/// /movie/allMoviesPage              paged list
/// /movie/allMoviesPageSort          paged, sorted list
/// /movie/update/{movie_id}          update (multipart)
/// /movie/delete/{movie_id}          delete
/// /movie/{movie_id}                 get
/// ```
///
/// Poster files live outside this tree under `/file` (see [`file::router`]).
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movie", movie::router())
}
