//! Lead Console App
//!
//! Root component: builds the services, provides context and the store, and
//! switches between the three tabs.

use console_core::ConsoleConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Dashboard, Header, LeadsList, OpportunitiesTable, StorageBanner, Tab, Toast};
use crate::context::AppContext;
use crate::storage::open_storage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (storage, degraded) = open_storage();
    let config = ConsoleConfig::load(storage.clone());
    log::info!(
        "starting with latency {}ms, failure rate {}",
        config.gateway.latency_ms,
        config.gateway.failure_rate
    );

    let ctx = AppContext::new(config, storage, degraded);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    commands::load_opportunities(ctx, store);

    // Load leads on mount and whenever a reload is requested
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(commands::load_leads(ctx, store));
    });

    let (active_tab, set_active_tab) = signal(Tab::Leads);

    view! {
        <div class="app-layout">
            <Header active_tab=active_tab set_active_tab=set_active_tab />
            <StorageBanner />
            <main class="main-content">
                {move || match active_tab.get() {
                    Tab::Leads => view! { <LeadsList /> }.into_any(),
                    Tab::Opportunities => view! { <OpportunitiesTable /> }.into_any(),
                    Tab::Dashboard => view! { <Dashboard /> }.into_any(),
                }}
            </main>
            <Toast />
        </div>
    }
}
