//! Typed key/value document store over a pluggable string medium.
//!
//! Every persisted document lives under its own string key as UTF-8 JSON.
//! The medium itself (browser `localStorage`, an in-memory map) is behind
//! [`StorageBackend`]; [`DocumentStore`] layers serialization, corruption
//! fallback, and the typed key table on top.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw storage medium beneath the document store.
/// Platform-specific implementations should provide this.
pub trait StorageBackend {
    /// Fetch the raw string stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any existing value.
    /// Returns `false` when the medium rejects the write (quota, privacy
    /// mode); the previous value is then medium-best-effort.
    fn store(&self, key: &str, value: &str) -> bool;

    /// Delete any value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&self, key: &str);
}

/// A storage key tied at compile time to the document shape stored under it.
///
/// The key table in [`keys`] is the whole persisted layout; putting the
/// wrong shape under a key is a type error rather than a runtime surprise.
pub struct StoreKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StoreKey<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The string key used in the underlying medium.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StoreKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StoreKey<T> {}

/// The persisted document layout, one typed key per storage entry.
pub mod keys {
    use super::StoreKey;
    use crate::profile::Profile;
    use crate::records::{
        Achievement, CalorieEntry, Goal, Habit, JournalEntry, Meditation, Mood, Transaction,
        Workout,
    };

    pub const PROFILE: StoreKey<Profile> = StoreKey::new("userProfile");
    pub const TRANSACTIONS: StoreKey<Vec<Transaction>> = StoreKey::new("transactions");
    pub const GOALS: StoreKey<Vec<Goal>> = StoreKey::new("finance-goals");
    pub const WORKOUTS: StoreKey<Vec<Workout>> = StoreKey::new("workouts");
    pub const CALORIES: StoreKey<Vec<CalorieEntry>> = StoreKey::new("calories");
    pub const MOODS: StoreKey<Vec<Mood>> = StoreKey::new("moods");
    pub const JOURNAL: StoreKey<Vec<JournalEntry>> = StoreKey::new("journal");
    pub const HABITS: StoreKey<Vec<Habit>> = StoreKey::new("habits");
    pub const MEDITATIONS: StoreKey<Vec<Meditation>> = StoreKey::new("meditations");
    pub const ACHIEVEMENTS: StoreKey<Vec<Achievement>> = StoreKey::new("achievements");
}

/// Typed document store with corruption fallback.
pub struct DocumentStore<B> {
    backend: B,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying medium.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the document under `key`, or `default` when the key is absent
    /// or the stored text fails to parse. Never raises to the caller.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: StoreKey<T>, default: T) -> T {
        self.get_opt(key).unwrap_or(default)
    }

    /// Load the document under `key`, treating corruption as absence.
    #[must_use]
    pub fn get_opt<T: DeserializeOwned>(&self, key: StoreKey<T>) -> Option<T> {
        let raw = self.backend.load(key.name())?;
        match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(err) => {
                log::warn!("discarding unreadable document under '{}': {err}", key.name());
                None
            }
        }
    }

    /// Serialize and store `value` under `key`, overwriting any existing
    /// document. Returns `false` when the medium rejects the write; the
    /// failure is logged but not retried.
    pub fn set<T: Serialize>(&self, key: StoreKey<T>, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("failed to serialize document for '{}': {err}", key.name());
                return false;
            }
        };
        let stored = self.backend.store(key.name(), &raw);
        if !stored {
            log::warn!("storage backend rejected write to '{}'", key.name());
        }
        stored
    }

    /// Delete the document under `key`. Idempotent.
    pub fn remove<T>(&self, key: StoreKey<T>) {
        self.backend.remove(key.name());
    }
}

/// In-memory backend for native hosts and tests.
///
/// Clones share the same map, mirroring how every handle to
/// `localStorage` sees one document set. Deliberately `!Send`; the store
/// is single-threaded by design.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry directly, bypassing serialization. Lets tests plant
    /// corrupt or hand-written documents.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// The raw string currently stored under `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
