//! Movieflix API server library.
//!
//! Exposes the building blocks (config, state, error handling, the movie
//! service, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod service;
pub mod state;
pub mod upload;
