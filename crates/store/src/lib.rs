//! # ward-store - Patient Record Storage
//!
//! This crate provides the persistence layer for the Ward patient-record
//! service: the [`Patient`] entity, page types for keyword search results,
//! the [`PatientStore`] trait, and a SQLite implementation backed by a
//! connection pool.
//!
//! ## Store contract
//!
//! [`PatientStore`] exposes the generic CRUD operations plus one query:
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | `save` | insert when the id is unset, wholesale overwrite otherwise |
//! | `find_by_id` | lookup by identifier |
//! | `find_all` | every stored record |
//! | `delete_by_id` | remove by identifier (no-op when absent) |
//! | `find_by_name_contains` | substring match on the name, paginated |
//! | `count` | total number of stored records |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ward_store::sqlite::SqliteStore;
//! use ward_store::{PageRequest, Patient, PatientStore};
//!
//! # async fn example() -> ward_store::StoreResult<()> {
//! let store = SqliteStore::in_memory()?;
//! store.init_schema()?;
//!
//! let saved = store
//!     .save(Patient::new("Dupont", None, true, 85))
//!     .await?;
//! assert!(saved.id.is_some());
//!
//! let page = store
//!     .find_by_name_contains("dup", &PageRequest::new(0, 5))
//!     .await?;
//! assert_eq!(page.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod page;
pub mod patient;
pub mod sqlite;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use page::{Page, PageRequest, Sort, SortDirection, SortField};
pub use patient::Patient;
pub use store::PatientStore;
