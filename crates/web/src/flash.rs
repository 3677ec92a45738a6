//! One-shot flash notices.
//!
//! A flash notice is a message surfaced to the user exactly once, on the
//! rendering immediately following the action that produced it. Rather than
//! relying on framework session magic, the notice is modeled explicitly as
//! a single-read slot in shared application state: mutating handlers `set`
//! it, the next list rendering `take`s it.

use parking_lot::Mutex;
use serde::Serialize;

/// A notice to surface on the next rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    /// The message text.
    pub message: String,
}

impl Flash {
    /// Creates a notice with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Single-read storage for the pending flash notice.
///
/// `set` overwrites any pending notice; `take` consumes it. Both are cheap
/// and never block beyond the inner lock.
#[derive(Debug, Default)]
pub struct FlashStore {
    slot: Mutex<Option<Flash>>,
}

impl FlashStore {
    /// Stores a notice, replacing any pending one.
    pub fn set(&self, flash: Flash) {
        *self.slot.lock() = Some(flash);
    }

    /// Consumes and returns the pending notice, if any.
    pub fn take(&self) -> Option<Flash> {
        self.slot.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_single_read() {
        let store = FlashStore::default();
        store.set(Flash::new("Patient saved."));

        assert_eq!(store.take(), Some(Flash::new("Patient saved.")));
        assert_eq!(store.take(), None);
    }

    #[test]
    fn test_set_overwrites_pending_notice() {
        let store = FlashStore::default();
        store.set(Flash::new("first"));
        store.set(Flash::new("second"));

        assert_eq!(store.take(), Some(Flash::new("second")));
    }

    #[test]
    fn test_empty_store_yields_nothing() {
        let store = FlashStore::default();
        assert_eq!(store.take(), None);
    }
}
