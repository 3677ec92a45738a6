//! Error types for the storage layer.
//!
//! The store defines no recovery logic of its own: engine failures are
//! wrapped and propagated upward as opaque errors for the caller (in
//! practice, the web layer) to surface.

use thiserror::Error;

/// The error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The database engine reported a failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
