//! Leads Table Component
//!
//! Sortable, paginated table of leads. Clicking a row selects the lead.

use console_core::domain::Lead;
use console_core::pagination::paginate;
use console_core::sort::{sort_rows, LEAD_COLUMNS};
use leptos::prelude::*;

use crate::components::{Pagination, SortableHeader};
use crate::context::AppContext;
use crate::models::{score_class, status_class};

#[component]
pub fn LeadsTable(
    #[prop(into)] leads: Signal<Vec<Lead>>,
    #[prop(into)] empty_message: Signal<&'static str>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let per_page = ctx.config().leads_page_size;
    let sort = ctx.leads_sort;
    let (page, set_page) = signal(1usize);

    // Back to the first page whenever the row set or ordering changes
    Effect::new(move |_| {
        leads.track();
        sort.get();
        set_page.set(1);
    });

    let current = Memo::new(move |_| {
        let sorted = sort_rows(&leads.get(), &sort.get());
        paginate(&sorted, page.get(), per_page)
    });

    view! {
        <div class="table-container">
            <table class="data-table leads-table">
                <SortableHeader columns=&LEAD_COLUMNS sort=sort />
                <tbody>
                    <Show
                        when=move || !current.get().items.is_empty()
                        fallback=move || view! {
                            <tr><td class="empty-row" colspan=LEAD_COLUMNS.len()>{move || empty_message.get()}</td></tr>
                        }
                    >
                        <For
                            each=move || current.get().items
                            key=|lead| (lead.id.clone(), lead.email.clone(), lead.status)
                            children=move |lead| {
                                let id = lead.id.clone();
                                view! {
                                    <tr class="clickable-row" on:click=move |_| on_select.run(id.clone())>
                                        <td class="cell-name">{lead.name}</td>
                                        <td>{lead.company}</td>
                                        <td>{lead.email}</td>
                                        <td>{lead.source}</td>
                                        <td><span class=score_class(lead.score)>{lead.score}</span></td>
                                        <td><span class=status_class(lead.status)>{lead.status.as_str()}</span></td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
            <Pagination
                page=page
                set_page=set_page
                total_pages=Signal::derive(move || current.get().total_pages)
                summary=Signal::derive(move || current.get().summary())
                has_previous=Signal::derive(move || current.get().has_previous())
                has_next=Signal::derive(move || current.get().has_next())
            />
        </div>
    }
}
