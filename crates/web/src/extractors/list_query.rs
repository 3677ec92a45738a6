//! List-context extractor.
//!
//! Extracts the `page`/`size`/`keyword` triple that every list-affecting
//! request carries, applying the documented defaults for absent parameters.

use axum::extract::{FromRequestParts, Query};
use axum::http::{StatusCode, request::Parts};
use serde::Deserialize;

/// Default page number when the request names none.
pub(crate) const DEFAULT_PAGE: u32 = 0;

/// Default page size when the request names none.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 5;

/// Axum extractor for the list context.
///
/// Applies the defaults `page=0`, `size=5`, `keyword=""`. Malformed numeric
/// parameters are rejected before handler logic runs.
///
/// # Example
///
/// ```rust,ignore
/// use ward_web::extractors::ListQuery;
///
/// async fn list_handler(query: ListQuery) {
///     let window = (query.page(), query.size());
///     let keyword = query.keyword();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Zero-based page number.
    page: u32,
    /// Page size.
    size: u32,
    /// Search keyword; empty matches everything.
    keyword: String,
}

/// Raw query parameters for the list context.
#[derive(Debug, Deserialize)]
struct ListQueryParams {
    page: Option<u32>,
    size: Option<u32>,
    keyword: Option<String>,
}

impl ListQuery {
    /// Creates a list context with the given values.
    pub fn new(page: u32, size: u32, keyword: impl Into<String>) -> Self {
        Self {
            page,
            size: size.max(1),
            keyword: keyword.into(),
        }
    }

    /// Returns the zero-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the search keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, "")
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid list parameters"))?;

        Ok(ListQuery::new(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            params.keyword.unwrap_or_default(),
        ))
    }
}
