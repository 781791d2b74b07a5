//! Lead Detail Component
//!
//! Slide-over panel for the selected lead with edit and convert actions and
//! the opportunities already created from it.

use leptos::prelude::*;

use crate::commands;
use crate::components::{ConvertLeadModal, LeadEditForm};
use crate::context::AppContext;
use crate::models::{format_amount, score_class, stage_class, status_class, Lead};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LeadDetail(
    lead_id: ReadSignal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (editing, set_editing) = signal(false);
    let (converting, set_converting) = signal(false);

    // A new selection starts in view mode
    Effect::new(move |_| {
        lead_id.track();
        set_editing.set(false);
        set_converting.set(false);
    });

    let lead = Memo::new(move |_| {
        let id = lead_id.get()?;
        let found = store.lead_cache().read().find(&id).cloned();
        found
    });
    let opportunities = Memo::new(move |_| {
        store.opportunities().track();
        let Some(id) = lead_id.get() else {
            return Vec::new();
        };
        commands::opportunities_for_lead(ctx, &id)
    });
    let can_convert = Memo::new(move |_| {
        opportunities.track();
        lead_id.get().is_some_and(|id| commands::can_convert(ctx, &id))
    });

    let field = move |f: fn(&Lead) -> String| move || lead.get().map(|l| f(&l)).unwrap_or_default();

    view! {
        <Show when=move || lead.with(Option::is_some)>
            <div class="slide-over-backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="slide-over" role="dialog" aria-label="Lead Details">
                <div class="slide-over-header">
                    <h2>"Lead Details"</h2>
                    <button class="modal-close" aria-label="Close panel" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="lead-summary">
                    <h3>{field(|l| l.name.clone())}</h3>
                    <p class="lead-company">{field(|l| l.company.clone())}</p>
                </div>

                <div class="detail-section">
                    <span class="section-title">"Contact Information"</span>
                    <span class="field-label">"Email Address"</span>
                    <p>{field(|l| l.email.clone())}</p>
                </div>

                <div class="detail-section detail-grid">
                    <div>
                        <span class="field-label">"Source"</span>
                        <p>{field(|l| l.source.clone())}</p>
                    </div>
                    <div>
                        <span class="field-label">"Score"</span>
                        {move || lead.get().map(|l| view! { <p class=score_class(l.score)>{l.score}</p> })}
                    </div>
                </div>

                <div class="detail-section">
                    <span class="section-title">"Status"</span>
                    {move || lead.get().map(|l| view! { <span class=status_class(l.status)>{l.status.as_str()}</span> })}
                </div>

                <Show when=move || editing.get()>
                    {move || lead.get_untracked().map(|l| view! {
                        <LeadEditForm lead=l on_done=Callback::new(move |_| set_editing.set(false)) />
                    })}
                </Show>

                <Show when=move || !opportunities.get().is_empty()>
                    <div class="detail-section">
                        <span class="section-title">"Opportunities"</span>
                        <ul class="lead-opportunities">
                            <For
                                each=move || opportunities.get()
                                key=|o| (o.id.clone(), o.stage)
                                children=|o| view! {
                                    <li>
                                        <span>{o.name}</span>
                                        <span class=stage_class(o.stage)>{o.stage.as_str()}</span>
                                        <span>{format_amount(o.amount)}</span>
                                    </li>
                                }
                            />
                        </ul>
                    </div>
                </Show>

                <div class="slide-over-actions">
                    <button class="btn-secondary" on:click=move |_| on_close.run(())>"Close"</button>
                    <Show when=move || !editing.get()>
                        <button class="btn-secondary" on:click=move |_| set_editing.set(true)>"Edit Lead"</button>
                    </Show>
                    <button
                        class="btn-primary"
                        disabled=move || !can_convert.get()
                        title=move || (!can_convert.get()).then_some("This lead has already been converted")
                        on:click=move |_| set_converting.set(true)
                    >
                        "Convert Lead"
                    </button>
                </div>
            </aside>

            <Show when=move || converting.get()>
                {move || lead.get_untracked().map(|l| view! {
                    <ConvertLeadModal lead=l on_close=Callback::new(move |_| set_converting.set(false)) />
                })}
            </Show>
        </Show>
    }
}
