//! Repository for the `movies` table.

use async_trait::async_trait;
use movieflix_core::paging::{MovieSortField, PageRequest};
use movieflix_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, NewMovie, Page};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, studio, movie_cast, release_year, poster";

/// Provides CRUD and paged queries for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director, studio, movie_cast, release_year, poster)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.studio)
            .bind(&input.movie_cast)
            .bind(input.release_year)
            .bind(&input.poster)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of an existing movie.
    ///
    /// Returns `None` if no row with `movie.id` exists.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                director = $3,
                studio = $4,
                movie_cast = $5,
                release_year = $6,
                poster = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(&movie.director)
            .bind(&movie.studio)
            .bind(&movie.movie_cast)
            .bind(movie.release_year)
            .bind(&movie.poster)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in primary-key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Fetch one page of movies plus the total row count.
    ///
    /// The sort column comes from a fixed whitelist; `id` breaks ties so page
    /// boundaries are stable.
    pub async fn list_paged(pool: &PgPool, request: &PageRequest) -> Result<Page<Movie>, sqlx::Error> {
        let order_clause = match request.sort {
            Some(sort) if sort.field == MovieSortField::Id => {
                format!("id {}", sort.direction.as_sql())
            }
            Some(sort) => format!(
                "{} {}, id ASC",
                sort.field.column(),
                sort.direction.as_sql()
            ),
            None => "id ASC".to_string(),
        };
        tracing::debug!(
            page_number = request.page_number,
            page_size = request.page_size,
            order = %order_clause,
            "Listing movie page"
        );

        let query = format!(
            "SELECT {COLUMNS} FROM movies
             ORDER BY {order_clause}
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Movie>(&query)
            .bind(request.page_size)
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let total_elements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;

        Ok(Page {
            items,
            total_elements,
        })
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Store abstraction
// ---------------------------------------------------------------------------

/// The persistence operations the movie service relies on.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn save(&self, input: &NewMovie) -> Result<Movie, sqlx::Error>;

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Movie>, sqlx::Error>;

    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Movie>, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`MovieStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn save(&self, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        MovieRepo::create(&self.pool, input).await
    }

    async fn update(&self, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update(&self.pool, movie).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(&self.pool).await
    }

    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Movie>, sqlx::Error> {
        MovieRepo::list_paged(&self.pool, request).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await
    }
}
