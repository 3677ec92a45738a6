//! Error types for the Ward web layer.
//!
//! The web layer defines no error taxonomy of its own: storage failures are
//! opaque and surface as a generic failure response. Malformed request
//! parameters never reach a handler; axum's extractors reject them first.
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | storage failure | 500 |
//! | malformed parameter | 400 (extractor rejection) |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use ward_store::StoreError;

/// The error type for web handlers.
#[derive(Error, Debug)]
pub enum WebError {
    /// An opaque storage failure, surfaced as HTTP 500.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::Storage(source) => {
                error!(%source, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = WebError::from(StoreError::from(rusqlite_invalid_query()));
        assert!(err.to_string().starts_with("storage failure:"));
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let response =
            WebError::from(StoreError::from(rusqlite_invalid_query())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn rusqlite_invalid_query() -> rusqlite::Error {
        rusqlite::Error::InvalidQuery
    }
}
