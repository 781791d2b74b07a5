//! Leads Filter Component
//!
//! Search box and status select bound to the persisted filter state.

use console_core::domain::LeadStatus;
use console_core::view::{FilterState, StatusFilter};
use leptos::prelude::*;

use crate::persisted::PersistedSignal;

#[component]
pub fn LeadsFilter(
    filter: PersistedSignal<FilterState>,
    #[prop(into)] filtered_count: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
) -> impl IntoView {
    let on_search = move |ev| {
        let search_term = event_target_value(&ev);
        filter.update(|prev| FilterState {
            search_term,
            ..prev.clone()
        });
    };

    let on_status = move |ev| {
        // Unknown option values fall back to all
        let status_filter = StatusFilter::try_from(event_target_value(&ev)).unwrap_or_default();
        filter.update(|prev| FilterState {
            status_filter,
            ..prev.clone()
        });
    };

    view! {
        <div class="leads-filter">
            <div class="filter-row">
                <div class="filter-field">
                    <label for="search">"Search"</label>
                    <input
                        id="search"
                        type="text"
                        placeholder="Search by name or company..."
                        prop:value=move || filter.get().search_term
                        on:input=on_search
                    />
                </div>
                <div class="filter-field">
                    <label for="status-filter">"Status"</label>
                    <select
                        id="status-filter"
                        prop:value=move || filter.get().status_filter.as_str()
                        on:change=on_status
                    >
                        <option value="all">"All Status"</option>
                        {LeadStatus::ALL.into_iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <Show when=move || filter.get().is_active()>
                    <button class="clear-filter-btn" on:click=move |_| filter.clear()>"Clear"</button>
                </Show>
            </div>
            <div class="filter-count">
                {move || format!("Showing {} of {} leads", filtered_count.get(), total_count.get())}
            </div>
        </div>
    }
}
