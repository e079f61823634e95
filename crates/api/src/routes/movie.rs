//! Route definitions for the `/movie` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movie`.
///
/// ```text
/// POST   /add-movie                 -> add_movie
/// GET    /all                       -> list_all
/// GET    /allMoviesPage             -> list_paged
/// GET    /allMoviesPageSort         -> list_paged_sorted
/// PUT    /update/{movie_id}         -> update
/// DELETE /delete/{movie_id}         -> delete
/// GET    /{movie_id}                -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-movie", post(movie::add_movie))
        .route("/all", get(movie::list_all))
        .route("/allMoviesPage", get(movie::list_paged))
        .route("/allMoviesPageSort", get(movie::list_paged_sorted))
        .route("/update/{movie_id}", put(movie::update))
        .route("/delete/{movie_id}", delete(movie::delete))
        .route("/{movie_id}", get(movie::get_by_id))
}
