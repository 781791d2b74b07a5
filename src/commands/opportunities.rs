//! Opportunity Commands
//!
//! Synchronous operations on the opportunity manager. The store mirror is
//! refreshed after every mutation.

use console_core::domain::{DomainResult, NewOpportunity, Opportunity, OpportunityPatch, Stage};

use crate::context::AppContext;
use crate::store::{store_set_opportunities, AppStore};

fn sync_store(ctx: &AppContext, store: &AppStore) {
    let all = ctx.with_opportunities(|m| m.all().to_vec());
    store_set_opportunities(store, all);
}

/// Populate the store from the manager
pub fn load_opportunities(ctx: AppContext, store: AppStore) {
    sync_store(&ctx, &store);
}

/// Opportunities converted from `lead_id`, oldest first
pub fn opportunities_for_lead(ctx: AppContext, lead_id: &str) -> Vec<Opportunity> {
    ctx.with_opportunities(|m| m.find_by_lead_id(lead_id).into_iter().cloned().collect())
}

pub fn can_convert(ctx: AppContext, lead_id: &str) -> bool {
    ctx.with_opportunities(|m| m.can_convert(lead_id))
}

pub fn convert_lead(ctx: AppContext, store: AppStore, new: NewOpportunity) -> DomainResult<Opportunity> {
    let created = ctx.with_opportunities(|m| m.convert(new))?;
    sync_store(&ctx, &store);
    Ok(created)
}

pub fn update_opportunity_stage(ctx: AppContext, store: AppStore, id: &str, stage: Stage) -> DomainResult<Opportunity> {
    let updated = ctx.with_opportunities(|m| m.update(id, OpportunityPatch::stage(stage)))?;
    sync_store(&ctx, &store);
    Ok(updated)
}

pub fn delete_opportunity(ctx: AppContext, store: AppStore, id: &str) {
    if !ctx.with_opportunities(|m| m.delete(id)) {
        log::debug!("opportunity {} was already gone", id);
    }
    sync_store(&ctx, &store);
}
