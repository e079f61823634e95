//! Request handlers.
//!
//! Handlers decode the request, delegate to the [`MovieService`] or the
//! poster blob store, and map errors via [`AppError`].
//!
//! [`MovieService`]: crate::service::MovieService
//! [`AppError`]: crate::error::AppError

pub mod file;
pub mod movie;
