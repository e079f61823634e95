//! Movie entity model.

use serde::Serialize;
use sqlx::FromRow;
use movieflix_core::types::DbId;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub studio: String,
    pub movie_cast: Vec<String>,
    pub release_year: i32,
    /// Filename of the poster inside the blob store.
    pub poster: String,
}

/// Input for inserting a movie. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub studio: String,
    pub movie_cast: Vec<String>,
    pub release_year: i32,
    pub poster: String,
}

/// One page of rows plus the size of the full result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
}
