//! The patient store trait.
//!
//! This module defines [`PatientStore`], the contract between the web layer
//! and whatever engine persists patient records. The trait covers the
//! generic CRUD operations plus the one query the application needs: a
//! keyword-paginated substring search over patient names.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::page::{Page, PageRequest};
use crate::patient::Patient;

/// Storage contract for patient records.
///
/// Handlers depend on this trait, not on a concrete engine; the engine is
/// injected through application state. All operations are request-scoped:
/// the store owns the persisted representation, callers hold only transient
/// copies.
///
/// # Example
///
/// ```ignore
/// use ward_store::{PageRequest, Patient, PatientStore};
///
/// async fn example<S: PatientStore>(store: &S) -> ward_store::StoreResult<()> {
///     let saved = store.save(Patient::new("Dupont", None, true, 85)).await?;
///     let id = saved.id.expect("storage assigns an id on insert");
///
///     let found = store.find_by_id(id).await?;
///     assert_eq!(found.as_ref().map(|p| p.name.as_str()), Some("Dupont"));
///
///     store.delete_by_id(id).await?;
///     assert!(store.find_by_id(id).await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Saves a patient record.
    ///
    /// Inserts when the record's id is `None` and returns the stored record
    /// carrying the identifier the engine assigned. When the id is set, the
    /// stored record is wholly replaced with the supplied field values (a
    /// full overwrite, not a merge); an id unknown to the store results in
    /// an insert with that id.
    async fn save(&self, patient: Patient) -> StoreResult<Patient>;

    /// Looks up a record by identifier.
    ///
    /// Returns `None` when no record carries the identifier.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Patient>>;

    /// Returns every stored record, in storage natural order.
    async fn find_all(&self) -> StoreResult<Vec<Patient>>;

    /// Removes the record with the given identifier.
    ///
    /// Removing an identifier the store does not know is a silent no-op.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    /// Returns the records whose name contains `keyword` as a substring,
    /// restricted to the requested page window.
    ///
    /// An empty keyword matches every record. Case sensitivity is the
    /// storage engine's contract. Ordering follows the request's sort
    /// specification, or storage natural order when it has none.
    async fn find_by_name_contains(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> StoreResult<Page<Patient>>;

    /// Returns the total number of stored records.
    async fn count(&self) -> StoreResult<u64>;
}
