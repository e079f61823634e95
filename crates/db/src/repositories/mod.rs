//! Repository layer.
//!
//! `MovieRepo` is a zero-sized struct providing async queries that accept
//! `&PgPool` as the first argument. [`MovieStore`] is the narrow interface the
//! service depends on; [`PgMovieStore`] backs it with a pool.

pub mod movie_repo;

pub use movie_repo::{MovieRepo, MovieStore, PgMovieStore};
