//! Feedback Components
//!
//! Loading spinner, error panel with optional retry, toast notice and the
//! storage-degraded banner.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn LoadingSpinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <output class="spinner" aria-label=label.clone()></output>
            <span class="loading-text">{label}</span>
        </div>
    }
}

/// Error panel; the retry button only appears when `on_retry` is given
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <p>{message}</p>
            {on_retry.map(|retry| view! {
                <button class="retry-btn" on:click=move |_| retry.run(())>"Retry"</button>
            })}
        </div>
    }
}

/// Current notice from context, if any
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast toast-success",
                NoticeKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button class="toast-close" aria-label="Dismiss" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Most recent warning or error captured by the logger
fn last_warning() -> Option<String> {
    console_logger::recent_at_least(log::Level::Warn)
        .pop()
        .map(|entry| entry.message)
}

#[component]
pub fn StorageBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.storage_degraded.get()>
            <div class="storage-banner" role="alert">
                "Browser storage is unavailable. Changes will be lost when the page is closed."
                {move || last_warning().map(|detail| view! { <small class="storage-detail">{detail}</small> })}
            </div>
        </Show>
    }
}
