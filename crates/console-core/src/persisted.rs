//! Persisted UI State
//!
//! A durable key/value slot with synchronous in-memory semantics. The
//! in-memory value is authoritative for the session; writes to the backing
//! storage are best-effort and their failures go to an error hook instead of
//! the caller.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::StorageError;
use crate::repository::KeyValueStorage;

/// Receives `(key, error)` for every persistence failure
pub type ErrorHook = Rc<dyn Fn(&str, &StorageError)>;

/// Hook used when none is supplied: log and carry on
pub fn log_storage_error() -> ErrorHook {
    Rc::new(|key: &str, err: &StorageError| log::warn!("persisted state {}: {}", key, err))
}

pub struct PersistedState<T> {
    key: String,
    fallback: T,
    value: T,
    /// Last serialization known to be in storage
    last_persisted: Option<String>,
    storage: Rc<dyn KeyValueStorage>,
    on_error: ErrorHook,
}

impl<T> fmt::Debug for PersistedState<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedState")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn open(key: &str, fallback: T, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::open_with_hook(key, fallback, storage, log_storage_error())
    }

    /// Read the stored value once. Absent or unparsable content yields
    /// `fallback`; storage is never consulted again for reads.
    pub fn open_with_hook(
        key: &str,
        fallback: T,
        storage: Rc<dyn KeyValueStorage>,
        on_error: ErrorHook,
    ) -> Self {
        let mut last_persisted = None;
        let value = match storage.get_item(key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(parsed) => {
                    last_persisted = Some(raw);
                    parsed
                }
                Err(e) => {
                    on_error(key, &StorageError::Serialization(e.to_string()));
                    fallback.clone()
                }
            },
            Ok(None) => fallback.clone(),
            Err(e) => {
                on_error(key, &e);
                fallback.clone()
            }
        };

        Self {
            key: key.to_string(),
            fallback,
            value,
            last_persisted,
            storage,
            on_error,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, then persist it
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Derive the next value from the previous one, then persist it
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Reset to the fallback and remove the stored entry
    pub fn clear(&mut self) {
        self.value = self.fallback.clone();
        self.last_persisted = None;
        if let Err(e) = self.storage.remove_item(&self.key) {
            (self.on_error)(&self.key, &e);
        }
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.value) {
            Ok(s) => s,
            Err(e) => {
                (self.on_error)(&self.key, &StorageError::Serialization(e.to_string()));
                return;
            }
        };
        if self.last_persisted.as_deref() == Some(serialized.as_str()) {
            return;
        }
        match self.storage.set_item(&self.key, &serialized) {
            Ok(()) => self.last_persisted = Some(serialized),
            Err(e) => (self.on_error)(&self.key, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;
    use crate::view::{FilterState, StatusFilter};
    use crate::domain::LeadStatus;
    use std::cell::RefCell;

    const KEY: &str = "leads-filter-state";

    fn recording_hook() -> (ErrorHook, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let hook: ErrorHook = Rc::new(move |key: &str, err: &StorageError| sink.borrow_mut().push(format!("{}: {}", key, err)));
        (hook, seen)
    }

    #[test]
    fn test_absent_key_uses_fallback() {
        let storage = Rc::new(MemoryStorage::new());
        let state = PersistedState::open(KEY, FilterState::default(), storage.clone());
        assert_eq!(state.get(), &FilterState::default());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_round_trip_through_fresh_instance() {
        let storage = Rc::new(MemoryStorage::new());
        let mut state = PersistedState::open(KEY, FilterState::default(), storage.clone());
        state.set(FilterState {
            search_term: "test search".to_string(),
            status_filter: StatusFilter::Only(LeadStatus::Qualified),
        });

        let reloaded = PersistedState::open(KEY, FilterState::default(), storage.clone());
        assert_eq!(reloaded.get().search_term, "test search");
        assert_eq!(reloaded.get().status_filter, StatusFilter::Only(LeadStatus::Qualified));
        assert_eq!(
            storage.raw(KEY).as_deref(),
            Some(r#"{"searchTerm":"test search","statusFilter":"qualified"}"#)
        );
    }

    #[test]
    fn test_identical_writes_hit_storage_once() {
        let storage = Rc::new(MemoryStorage::new());
        let mut state = PersistedState::open("counter", 0u32, storage.clone());
        state.set(3);
        state.set(3);
        assert_eq!(storage.write_count(), 1);

        state.update(|n| n + 1);
        assert_eq!(*state.get(), 4);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_writing_loaded_value_is_skipped() {
        let storage = Rc::new(MemoryStorage::new().with_item("counter", "9"));
        let mut state = PersistedState::open("counter", 0u32, storage.clone());
        assert_eq!(*state.get(), 9);
        state.set(9);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_malformed_content_falls_back_and_reports() {
        let storage = Rc::new(MemoryStorage::new().with_item(KEY, "{not json"));
        let (hook, seen) = recording_hook();
        let state = PersistedState::open_with_hook(KEY, FilterState::default(), storage, hook);

        assert_eq!(state.get(), &FilterState::default());
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].starts_with("leads-filter-state: serialization failed"));
    }

    #[test]
    fn test_unknown_status_filter_falls_back() {
        let storage = Rc::new(
            MemoryStorage::new().with_item(KEY, r#"{"searchTerm":"x","statusFilter":"archived"}"#),
        );
        let (hook, _) = recording_hook();
        let state = PersistedState::open_with_hook(KEY, FilterState::default(), storage, hook);
        assert_eq!(state.get(), &FilterState::default());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_value() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_fail_writes(true);
        let (hook, seen) = recording_hook();
        let mut state = PersistedState::open_with_hook("counter", 0u32, storage.clone(), hook);

        state.set(5);
        assert_eq!(*state.get(), 5);
        assert_eq!(seen.borrow().len(), 1);
        assert!(storage.raw("counter").is_none());

        // Not recorded as persisted, so the next write retries
        storage.set_fail_writes(false);
        state.set(5);
        assert_eq!(storage.raw("counter").as_deref(), Some("5"));
    }

    #[test]
    fn test_unavailable_storage_on_open() {
        let storage = Rc::new(MemoryStorage::new().with_item("counter", "4"));
        storage.set_fail_reads(true);
        let (hook, seen) = recording_hook();
        let state = PersistedState::open_with_hook("counter", 1u32, storage, hook);
        assert_eq!(*state.get(), 1);
        assert_eq!(seen.borrow().as_slice(), ["counter: storage is unavailable"]);
    }

    #[test]
    fn test_clear_resets_and_removes() {
        let storage = Rc::new(MemoryStorage::new());
        let mut state = PersistedState::open("counter", 1u32, storage.clone());
        state.set(7);
        state.clear();

        assert_eq!(*state.get(), 1);
        assert!(storage.raw("counter").is_none());

        // Cleared entries are written again even if the value matches an earlier one
        state.set(7);
        assert_eq!(storage.raw("counter").as_deref(), Some("7"));
    }
}
