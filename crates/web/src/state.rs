//! Application state for the Ward web layer.
//!
//! This module defines the shared application state that is available to
//! all request handlers: the patient store, the server configuration, and
//! the one-shot flash notice slot.

use std::sync::Arc;

use ward_store::PatientStore;

use crate::config::ServerConfig;
use crate::flash::FlashStore;

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The patient store type (must implement [`PatientStore`])
pub struct AppState<S> {
    /// The patient store.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Pending flash notice, consumed by the next list rendering.
    flash: Arc<FlashStore>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be
// Clone itself.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
            flash: Arc::clone(&self.flash),
        }
    }
}

impl<S: PatientStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            flash: Arc::new(FlashStore::default()),
        }
    }

    /// Returns a reference to the patient store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the flash notice slot.
    pub fn flash(&self) -> &FlashStore {
        &self.flash
    }

    /// Returns the cap on the list view page size.
    pub fn max_page_size(&self) -> u32 {
        self.config.max_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ward_store::{Page, PageRequest, Patient, StoreResult};

    // Mock store for testing
    struct MockStore;

    #[async_trait]
    impl PatientStore for MockStore {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn save(&self, _patient: Patient) -> StoreResult<Patient> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Patient>> {
            unimplemented!()
        }

        async fn find_all(&self) -> StoreResult<Vec<Patient>> {
            unimplemented!()
        }

        async fn delete_by_id(&self, _id: i64) -> StoreResult<()> {
            unimplemented!()
        }

        async fn find_by_name_contains(
            &self,
            _keyword: &str,
            _page: &PageRequest,
        ) -> StoreResult<Page<Patient>> {
            unimplemented!()
        }

        async fn count(&self) -> StoreResult<u64> {
            unimplemented!()
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MockStore), ServerConfig::default());
        assert_eq!(state.store().backend_name(), "mock");
        assert_eq!(state.max_page_size(), 100);
    }

    #[test]
    fn test_app_state_clone_shares_flash() {
        let state = AppState::new(Arc::new(MockStore), ServerConfig::default());
        let cloned = state.clone();

        state.flash().set(crate::flash::Flash::new("saved"));
        assert!(cloned.flash().take().is_some());
    }
}
