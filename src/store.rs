//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use console_core::domain::{Lead, Opportunity};
use console_core::lead_cache::LeadCache;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Lead collection fetched from the gateway and its load status
    pub lead_cache: LeadCache,
    /// Mirror of the opportunity manager's collection
    pub opportunities: Vec<Opportunity>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark the lead cache as fetching
pub fn store_begin_lead_load(store: &AppStore) {
    store.lead_cache().write().begin_load();
}

/// Record the outcome of a lead fetch
pub fn store_finish_lead_load(store: &AppStore, result: console_core::domain::DomainResult<Vec<Lead>>) {
    store.lead_cache().write().finish_load(result);
}

/// Merge an updated lead into the cache by ID
pub fn store_update_lead(store: &AppStore, updated: Lead) {
    store.lead_cache().write().apply_update(updated);
}

/// Replace the opportunity mirror
pub fn store_set_opportunities(store: &AppStore, opportunities: Vec<Opportunity>) {
    store.opportunities().set(opportunities);
}
