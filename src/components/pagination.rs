//! Pagination Component
//!
//! Previous/next buttons around a page-number strip with ellipses.

use console_core::pagination::{visible_pages, PageMarker};
use leptos::prelude::*;

const WINDOW: usize = 1;

#[component]
pub fn Pagination(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] summary: Signal<String>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
) -> impl IntoView {
    let go_to = move |target: usize| {
        let total = total_pages.get_untracked();
        if (1..=total).contains(&target) {
            set_page.set(target);
        }
    };

    view! {
        <div class="pagination">
            <span class="pagination-summary">{move || summary.get()}</span>
            <Show when=move || { total_pages.get() > 1 }>
                <nav class="pagination-controls" aria-label="Pagination">
                    <button
                        class="page-btn"
                        disabled=move || !has_previous.get()
                        on:click=move |_| go_to(page.get_untracked().saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    {move || {
                        visible_pages(page.get(), total_pages.get(), WINDOW)
                            .into_iter()
                            .map(|marker| match marker {
                                PageMarker::Page(n) => {
                                    let class = move || if page.get() == n { "page-btn active" } else { "page-btn" };
                                    view! {
                                        <button class=class on:click=move |_| go_to(n)>{n}</button>
                                    }
                                    .into_any()
                                }
                                PageMarker::Ellipsis => view! { <span class="page-ellipsis">"..."</span> }.into_any(),
                            })
                            .collect_view()
                    }}
                    <button
                        class="page-btn"
                        disabled=move || !has_next.get()
                        on:click=move |_| go_to(page.get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </nav>
            </Show>
        </div>
    }
}
