//! Leads List Component
//!
//! The leads tab: filter bar, load states, table and the detail panel for
//! the selected lead.

use console_core::lead_cache::LoadStatus;
use console_core::view::filter_and_sort_leads;
use leptos::prelude::*;

use crate::components::{ErrorMessage, LeadDetail, LeadsFilter, LeadsTable, LoadingSpinner};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LeadsList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let filter = ctx.leads_filter;
    let (selected, set_selected) = signal::<Option<String>>(None);

    let all_leads = Memo::new(move |_| store.lead_cache().read().leads.clone());
    let status = Memo::new(move |_| store.lead_cache().read().status.clone());
    let visible = Memo::new(move |_| filter_and_sort_leads(&all_leads.get(), &filter.get()));

    let loading = Memo::new(move |_| store.lead_cache().read().is_loading());
    let first_load = move || (loading.get() || status.get() == LoadStatus::Idle) && all_leads.get().is_empty();
    let failed = move || matches!(status.get(), LoadStatus::Failed(_));

    let empty_message = Signal::derive(move || {
        if all_leads.get().is_empty() {
            "No leads found"
        } else {
            "No leads match your search criteria"
        }
    });

    view! {
        <section class="leads-list">
            <Show when=move || !first_load() fallback=|| view! { <LoadingSpinner label="Loading leads" /> }>
                <Show
                    when=move || !failed()
                    fallback=move || view! {
                        <ErrorMessage
                            message="Failed to load leads. Please try again."
                            on_retry=Callback::new(move |_| ctx.reload())
                        />
                    }
                >
                    <LeadsFilter
                        filter=filter
                        filtered_count=Signal::derive(move || visible.get().len())
                        total_count=Signal::derive(move || all_leads.get().len())
                    />
                    <LeadsTable
                        leads=visible
                        empty_message=empty_message
                        on_select=Callback::new(move |id: String| set_selected.set(Some(id)))
                    />
                </Show>
            </Show>
            <LeadDetail
                lead_id=selected
                on_close=Callback::new(move |_| set_selected.set(None))
            />
        </section>
    }
}
