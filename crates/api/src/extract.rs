//! Extractor wrappers whose rejections render as [`AppError`] JSON bodies
//! instead of axum's plain-text defaults.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] rejecting with `400 BAD_REQUEST` JSON.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// [`axum::extract::Query`] rejecting with `400 BAD_REQUEST` JSON.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
