//! Domain building blocks for the movie catalog: shared types, the error
//! taxonomy, paging/sorting rules and the on-disk poster store.

pub mod blob_store;
pub mod error;
pub mod paging;
pub mod types;
