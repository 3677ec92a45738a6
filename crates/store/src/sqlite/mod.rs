//! SQLite store implementation.
//!
//! This module provides a complete SQLite implementation of
//! [`PatientStore`](crate::PatientStore). It supports both in-memory
//! databases (great for testing) and file-based databases (for development
//! and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use ward_store::sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let store = SqliteStore::in_memory()?;
//!
//! // Initialize the schema
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE patients (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL DEFAULT '',
//!     birth_date TEXT,                      -- ISO calendar date or NULL
//!     sick INTEGER NOT NULL DEFAULT 0,
//!     score INTEGER NOT NULL DEFAULT 0
//! );
//! ```

mod backend;
mod schema;
mod store;

pub use backend::{SqliteStore, SqliteStoreConfig};
pub use schema::SCHEMA_VERSION;
