//! Movie catalog service.
//!
//! Orchestrates the poster [`BlobStore`] and the [`MovieStore`] repository:
//! validates input, keeps poster files and rows in step, and maps rows to
//! [`MovieDto`]s with their poster URL.

use std::sync::Arc;

use movieflix_core::blob_store::{validate_filename, BlobStore};
use movieflix_core::error::CoreError;
use movieflix_core::paging::{MovieSort, PageMeta, PageRequest, ASCENDING_KEYWORD};
use movieflix_core::types::DbId;
use movieflix_db::models::movie::{Movie, NewMovie};
use movieflix_db::repositories::MovieStore;

use crate::dto::{MovieDto, MoviePageResponse};
use crate::error::{AppError, AppResult};
use crate::upload::UploadedFile;

const ENTITY: &str = "Movie";

pub struct MovieService {
    store: Arc<dyn MovieStore>,
    blobs: BlobStore,
    base_url: String,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>, blobs: BlobStore, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            store,
            blobs,
            base_url,
        }
    }

    /// Store the poster, then insert the movie that references it.
    ///
    /// Fails with `EmptyFile` for a zero-byte upload and `DuplicateFile` when
    /// a poster of the same name is already stored; neither writes anything.
    pub async fn add_movie(&self, dto: MovieDto, file: UploadedFile) -> AppResult<MovieDto> {
        ensure_non_empty(&file)?;
        validate_metadata(&dto)?;

        if self.blobs.exists(&file.filename).await? {
            return Err(CoreError::DuplicateFile(format!(
                "File '{}' already exists! Please enter another file name",
                file.filename
            ))
            .into());
        }

        let poster = self.blobs.store(&file.filename, &file.data).await?;

        let input = NewMovie {
            title: dto.title,
            director: dto.director,
            studio: dto.studio,
            movie_cast: dto.movie_cast,
            release_year: dto.release_year,
            poster: poster.clone(),
        };

        let saved = match self.store.save(&input).await {
            Ok(saved) => saved,
            Err(err) => {
                // Do not leave an unreferenced poster behind.
                if let Err(cleanup) = self.blobs.delete_if_exists(&poster).await {
                    tracing::warn!(error = %cleanup, filename = %poster, "Failed to remove orphaned poster");
                }
                return Err(AppError::Database(err));
            }
        };

        tracing::info!(movie_id = saved.id, filename = %poster, "Movie added");
        Ok(self.to_dto(saved))
    }

    pub async fn get_movie(&self, id: DbId) -> AppResult<MovieDto> {
        let movie = self.find_existing(id).await?;
        Ok(self.to_dto(movie))
    }

    /// Every movie in primary-key order.
    pub async fn get_all_movies(&self) -> AppResult<Vec<MovieDto>> {
        let movies = self.store.find_all().await?;
        Ok(movies.into_iter().map(|m| self.to_dto(m)).collect())
    }

    /// Replace the stored fields of movie `id` with `dto`.
    ///
    /// When `file` is given the old poster is removed (a missing file is
    /// fine) and the new one stored; otherwise the current poster is kept.
    pub async fn update_movie(
        &self,
        id: DbId,
        dto: MovieDto,
        file: Option<UploadedFile>,
    ) -> AppResult<MovieDto> {
        validate_metadata(&dto)?;
        let existing = self.find_existing(id).await?;

        let poster = match file {
            Some(file) => {
                ensure_non_empty(&file)?;
                validate_filename(&file.filename)?;
                self.blobs.delete_if_exists(&existing.poster).await?;
                self.blobs.store(&file.filename, &file.data).await?
            }
            None => existing.poster,
        };

        let merged = Movie {
            id,
            title: dto.title,
            director: dto.director,
            studio: dto.studio,
            movie_cast: dto.movie_cast,
            release_year: dto.release_year,
            poster,
        };

        let updated = self
            .store
            .update(&merged)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(movie_id = id, filename = %updated.poster, "Movie updated");
        Ok(self.to_dto(updated))
    }

    /// Remove the poster (best-effort) and then the row.
    pub async fn delete_movie(&self, id: DbId) -> AppResult<String> {
        let movie = self.find_existing(id).await?;

        self.blobs.delete_if_exists(&movie.poster).await?;

        if !self.store.delete(movie.id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }

        tracing::info!(movie_id = id, "Movie deleted");
        Ok(format!("Movie deleted with id = {id}"))
    }

    /// One page of the catalog, optionally sorted.
    ///
    /// `dir` only matters when `sort_by` is given; it defaults to ascending.
    pub async fn get_all_movies_with_pagination(
        &self,
        page_number: i64,
        page_size: i64,
        sort_by: Option<&str>,
        dir: Option<&str>,
    ) -> AppResult<MoviePageResponse> {
        let sort = sort_by
            .map(|field| MovieSort::parse(field, dir.unwrap_or(ASCENDING_KEYWORD)))
            .transpose()?;
        let request = PageRequest::new(page_number, page_size, sort)?;

        let page = self.store.find_all_paged(&request).await?;
        let meta = PageMeta::compute(&request, page.total_elements);

        Ok(MoviePageResponse {
            movie_dtos: page.items.into_iter().map(|m| self.to_dto(m)).collect(),
            page_number,
            page_size,
            total_elements: meta.total_elements,
            total_pages: meta.total_pages,
            is_last: meta.is_last,
        })
    }

    async fn find_existing(&self, id: DbId) -> AppResult<Movie> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }

    fn to_dto(&self, movie: Movie) -> MovieDto {
        MovieDto::from_movie(movie, &self.base_url)
    }
}

fn ensure_non_empty(file: &UploadedFile) -> Result<(), CoreError> {
    if file.is_empty() {
        return Err(CoreError::EmptyFile(
            "File is empty! Please send another file.".into(),
        ));
    }
    Ok(())
}

fn validate_metadata(dto: &MovieDto) -> Result<(), CoreError> {
    for (field, value) in [
        ("title", &dto.title),
        ("director", &dto.director),
        ("studio", &dto.studio),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Please provide movie's {field}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
