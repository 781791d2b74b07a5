//! Dashboard Component
//!
//! Headline figures across leads and opportunities.

use console_core::stats::{format_currency, DashboardStats};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| {
        let cache = store.lead_cache().read();
        let stats = DashboardStats::compute(&cache.leads, &store.opportunities().read());
        stats
    });

    view! {
        <section class="dashboard">
            <h2>"Dashboard"</h2>
            <div class="stat-grid">
                <StatCard label="Total Leads" value=Signal::derive(move || stats.get().leads_count.to_string()) />
                <StatCard label="Opportunities" value=Signal::derive(move || stats.get().opportunities_count.to_string()) />
                <StatCard label="Conversion Rate" value=Signal::derive(move || format!("{}%", stats.get().conversion_rate)) />
                <StatCard label="Pipeline Value" value=Signal::derive(move || format_currency(stats.get().total_value)) />
                <StatCard label="Won Value" value=Signal::derive(move || format_currency(stats.get().won_value)) />
            </div>
        </section>
    }
}
