//! Persisted Signals
//!
//! Bridges a `PersistedState` slot into the reactive graph: reads are
//! tracked through an `RwSignal`, writes go to the slot first and then
//! notify subscribers.

use std::cell::RefCell;
use std::rc::Rc;

use console_core::persisted::{ErrorHook, PersistedState};
use console_core::repository::KeyValueStorage;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct PersistedSignal<T: 'static> {
    value: RwSignal<T>,
    slot: StoredValue<RefCell<PersistedState<T>>, LocalStorage>,
}

impl<T: 'static> Clone for PersistedSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PersistedSignal<T> {}

impl<T> PersistedSignal<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(key: &str, fallback: T, storage: Rc<dyn KeyValueStorage>, on_error: ErrorHook) -> Self {
        let state = PersistedState::open_with_hook(key, fallback, storage, on_error);
        Self {
            value: RwSignal::new(state.get().clone()),
            slot: StoredValue::new_local(RefCell::new(state)),
        }
    }

    /// Tracked read
    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, value: T) {
        self.slot.with_value(|slot| slot.borrow_mut().set(value.clone()));
        self.value.set(value);
    }

    /// Derive the next value from the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.get_untracked());
        self.set(next);
    }

    pub fn clear(&self) {
        let fallback = self.slot.with_value(|slot| {
            let mut slot = slot.borrow_mut();
            slot.clear();
            slot.get().clone()
        });
        self.value.set(fallback);
    }
}
