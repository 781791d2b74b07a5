//! Lead Edit Form Component
//!
//! Inline editor for a lead's email and status. Validation runs before the
//! gateway is called; a retryable failure offers a retry.

use console_core::domain::{FieldErrors, Lead, LeadEditForm as EditForm, LeadStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ErrorMessage;
use crate::context::AppContext;
use crate::store::use_app_store;

#[component]
pub fn LeadEditForm(lead: Lead, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let lead_id = StoredValue::new(lead.id.clone());
    let form = RwSignal::new(EditForm::from_lead(&lead));
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (failure, set_failure) = signal::<Option<(String, bool)>>(None);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let patch = match form.get_untracked().validate() {
            Ok(patch) => patch,
            Err(errs) => {
                set_errors.set(errs);
                return;
            }
        };
        set_errors.set(FieldErrors::default());
        set_failure.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = commands::update_lead(ctx, store, lead_id.get_value(), patch).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    ctx.notify_success("Lead updated");
                    on_done.run(());
                }
                Err(e) => {
                    log::warn!("lead update failed: {}", e);
                    ctx.notify_error(e.to_string());
                    set_failure.set(Some((e.to_string(), e.is_retryable())));
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <form class="lead-edit-form" on:submit=on_submit>
            <div class="form-field">
                <label for="lead-email">"Email"</label>
                <input
                    id="lead-email"
                    type="email"
                    prop:value=move || form.get().email
                    disabled=move || submitting.get()
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                {move || errors.get().get("email").map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>
            <div class="form-field">
                <label for="lead-status">"Status"</label>
                <select
                    id="lead-status"
                    prop:value=move || form.get().status
                    disabled=move || submitting.get()
                    on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                >
                    {LeadStatus::ALL.into_iter().map(|status| view! {
                        <option value=status.as_str()>{status.label()}</option>
                    }).collect_view()}
                </select>
                {move || errors.get().get("status").map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            {move || failure.get().map(|(message, retryable)| {
                if retryable {
                    view! { <ErrorMessage message=message on_retry=Callback::new(move |_| submit()) /> }.into_any()
                } else {
                    view! { <ErrorMessage message=message /> }.into_any()
                }
            })}

            <div class="form-actions">
                <button
                    type="button"
                    class="btn-secondary"
                    disabled=move || submitting.get()
                    on:click=move |_| on_done.run(())
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
