//! Lead Commands
//!
//! Fetch and update leads through the gateway.

use console_core::domain::{DomainResult, Lead, LeadPatch};

use crate::context::AppContext;
use crate::store::{store_begin_lead_load, store_finish_lead_load, store_update_lead, AppStore};

/// Refetch the full collection into the store
pub async fn load_leads(ctx: AppContext, store: AppStore) {
    store_begin_lead_load(&store);
    let gateway = ctx.gateway();
    let result = gateway.fetch_all().await;
    match &result {
        Ok(leads) => log::info!("loaded {} leads", leads.len()),
        Err(e) => log::error!("failed to load leads: {}", e),
    }
    store_finish_lead_load(&store, result);
}

/// Send a lead update; on success the cache is updated in place
pub async fn update_lead(ctx: AppContext, store: AppStore, id: String, patch: LeadPatch) -> DomainResult<Lead> {
    let gateway = ctx.gateway();
    let updated = gateway.update(&id, &patch).await?;
    store_update_lead(&store, updated.clone());
    log::info!("updated lead {}", id);
    Ok(updated)
}
