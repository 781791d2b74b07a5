//! Delete Confirm Button Component
//!
//! Row action for the opportunities table: the first click arms the button,
//! the second one removes the record.

use leptos::prelude::*;

/// Two-step delete for a single table row.
///
/// `label` names the record in the accessible name ("Delete Acme renewal").
/// `on_confirm` runs only after "Yes"; "No" disarms without side effects.
/// Clicks never reach the row underneath.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let aria_label = format!("Delete {}", label);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let aria_label = aria_label.clone();
                view! {
                    <button
                        class="delete-btn"
                        aria-label=aria_label
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "Delete"
                    </button>
                }
            }
        >
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
