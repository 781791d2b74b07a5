//! Sortable Header Component
//!
//! Table header row whose cells cycle the persisted sort state.

use console_core::sort::{SortDirection, SortState};
use leptos::prelude::*;

use crate::persisted::PersistedSignal;

fn indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "",
    }
}

fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}

#[component]
pub fn SortableHeader(
    columns: &'static [(&'static str, &'static str)],
    sort: PersistedSignal<SortState>,
    /// Extra trailing header cells (e.g. actions)
    #[prop(optional)]
    trailing: Option<&'static str>,
) -> impl IntoView {
    view! {
        <thead>
            <tr>
                {columns.iter().map(|(key, label)| {
                    let key = *key;
                    let direction = move || sort.get().direction_for(key);
                    view! {
                        <th
                            class="sortable"
                            aria-sort=move || aria_sort(direction())
                            on:click=move |_| sort.update(|state| state.toggle(key))
                        >
                            {*label}
                            <span class="sort-indicator">{move || indicator(direction())}</span>
                        </th>
                    }
                }).collect_view()}
                {trailing.map(|label| view! { <th>{label}</th> })}
            </tr>
        </thead>
    }
}
