//! Browser Adapters
//!
//! `window.localStorage` behind the core storage trait, and a timer-backed
//! latency for the simulated gateway.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use console_core::domain::StorageError;
use console_core::gateway::Latency;
use console_core::repository::{KeyValueStorage, MemoryStorage};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// `None` when the page has no window or storage access is denied
    pub fn local() -> Option<Self> {
        let window = web_sys::window()?;
        let inner = window.local_storage().ok().flatten()?;
        Some(Self { inner })
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Backend(describe(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::QuotaExceeded(describe(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| StorageError::Backend(describe(e)))
    }
}

/// Local storage when available, otherwise a session-only memory map.
/// The flag is true when the fallback was used.
pub fn open_storage() -> (Rc<dyn KeyValueStorage>, bool) {
    match BrowserStorage::local() {
        Some(storage) => (Rc::new(storage), false),
        None => {
            log::warn!("local storage unavailable, state will not survive a reload");
            (Rc::new(MemoryStorage::new()), true)
        }
    }
}

/// Delay backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerLatency;

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn wait(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
