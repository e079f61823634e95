//! Wire representations of catalog data.
//!
//! Field names follow the camelCase JSON the catalog's clients already speak
//! (`movieId`, `movieCast`, `posterUrl`).

use movieflix_core::types::DbId;
use movieflix_db::models::movie::Movie;
use serde::{Deserialize, Serialize};

/// A movie as sent and received over HTTP.
///
/// On input, `movieId`, `poster` and `posterUrl` may be omitted and are
/// ignored; the id comes from the path or the database and the poster from
/// the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[serde(default)]
    pub movie_id: Option<DbId>,
    pub title: String,
    pub director: String,
    pub studio: String,
    #[serde(default)]
    pub movie_cast: Vec<String>,
    pub release_year: i32,
    #[serde(default)]
    pub poster: Option<String>,
    /// Derived from the base URL and `poster`; never persisted.
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl MovieDto {
    /// Map a persisted row to its wire form with `poster_url` filled in.
    pub fn from_movie(movie: Movie, base_url: &str) -> Self {
        let poster_url = poster_url(base_url, &movie.poster);
        Self {
            movie_id: Some(movie.id),
            title: movie.title,
            director: movie.director,
            studio: movie.studio,
            movie_cast: movie.movie_cast,
            release_year: movie.release_year,
            poster: Some(movie.poster),
            poster_url: Some(poster_url),
        }
    }
}

/// `<base_url>/file/<poster>`.
pub fn poster_url(base_url: &str, poster: &str) -> String {
    format!("{base_url}/file/{poster}")
}

/// One page of the catalog plus paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePageResponse {
    pub movie_dtos: Vec<MovieDto>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub is_last: bool,
}
