//! Header Component
//!
//! Title and the tab strip switching between the three views.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Leads,
    Opportunities,
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Leads, Tab::Opportunities, Tab::Dashboard];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Leads => "Leads",
            Tab::Opportunities => "Opportunities",
            Tab::Dashboard => "Dashboard",
        }
    }
}

#[component]
pub fn Header(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-title">
                <h1>"Mini Seller Console"</h1>
                <p>"Triage leads and convert them into opportunities"</p>
            </div>
            <nav class="tab-bar">
                {Tab::ALL.into_iter().map(|tab| {
                    let tab_class = move || {
                        if active_tab.get() == tab { "tab active" } else { "tab" }
                    };
                    view! {
                        <button
                            class=tab_class
                            aria-current=move || (active_tab.get() == tab).then_some("page")
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
