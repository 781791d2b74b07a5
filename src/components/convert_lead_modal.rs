//! Convert Lead Modal Component
//!
//! Creates an opportunity from a lead. Name and account name are taken from
//! the lead; stage and amount are chosen here.

use console_core::domain::{ConversionForm, FieldErrors, Lead, Stage};
use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;
use crate::store::use_app_store;

#[component]
pub fn ConvertLeadModal(lead: Lead, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let lead_id = StoredValue::new(lead.id.clone());
    let form = RwSignal::new(ConversionForm::from_lead(&lead));
    let (errors, set_errors) = signal(FieldErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new = match form.get_untracked().validate(&lead_id.get_value()) {
            Ok(new) => new,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        match commands::convert_lead(ctx, store, new) {
            Ok(created) => {
                log::info!("lead {} converted into {}", lead_id.get_value(), created.id);
                ctx.notify_success("Lead converted to opportunity");
                on_close.run(());
            }
            Err(e) => ctx.notify_error(e.to_string()),
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.get().get(field).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="convert-title"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3 id="convert-title">"Convert Lead to Opportunity"</h3>
                    <button class="modal-close" aria-label="Close modal" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <form class="convert-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="opp-name">"Name *"</label>
                        <input id="opp-name" type="text" readonly disabled prop:value=move || form.get().name />
                        {field_error("name")}
                    </div>
                    <div class="form-field">
                        <label for="opp-account">"Account Name *"</label>
                        <input id="opp-account" type="text" readonly disabled prop:value=move || form.get().account_name />
                        {field_error("accountName")}
                    </div>
                    <div class="form-field">
                        <label for="opp-stage">"Stage *"</label>
                        <select
                            id="opp-stage"
                            prop:value=move || form.get().stage
                            on:change=move |ev| form.update(|f| f.stage = event_target_value(&ev))
                        >
                            {Stage::ALL.into_iter().map(|stage| view! {
                                <option value=stage.as_str()>{stage.as_str()}</option>
                            }).collect_view()}
                        </select>
                        {field_error("stage")}
                    </div>
                    <div class="form-field">
                        <label for="opp-amount">"Amount (Optional)"</label>
                        <input
                            id="opp-amount"
                            type="number"
                            min="0"
                            step="any"
                            placeholder="Enter amount in dollars"
                            prop:value=move || form.get().amount
                            on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                        />
                        {field_error("amount")}
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Convert to Opportunity"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
