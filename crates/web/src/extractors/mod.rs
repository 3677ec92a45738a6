//! Axum extractors for list-context request data.

mod list_query;

pub use list_query::ListQuery;
