//! `localStorage`-backed implementation of the core storage contract.

use gloo::storage::{LocalStorage, Storage};
use lifepet_core::{StorageBackend, SystemClock, TrackerEngine};

/// `window.localStorage` as a raw string medium.
///
/// Read errors surface as absent keys and the document store falls back to
/// the caller's default; rejected writes (quota, privacy mode) surface as
/// `false`, matching the core contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserBackend;

impl StorageBackend for BrowserBackend {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) -> bool {
        match LocalStorage::raw().set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("localStorage rejected write to '{key}': {err:?}");
                false
            }
        }
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// Create an engine wired to `localStorage` and the wall clock.
#[must_use]
pub fn create_browser_engine() -> TrackerEngine<BrowserBackend, SystemClock> {
    TrackerEngine::new(BrowserBackend, SystemClock)
}
