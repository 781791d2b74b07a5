//! Opportunities Table Component
//!
//! Sortable, paginated list of opportunities with inline stage editing and
//! delete confirmation.

use console_core::domain::Stage;
use console_core::pagination::paginate;
use console_core::sort::{sort_rows, OPPORTUNITY_COLUMNS};
use leptos::prelude::*;

use crate::commands;
use crate::components::{DeleteConfirmButton, Pagination, SortableHeader};
use crate::context::AppContext;
use crate::models::{format_amount, format_date, stage_class};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OpportunitiesTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let per_page = ctx.config().opportunities_page_size;
    let sort = ctx.opportunities_sort;
    let (page, set_page) = signal(1usize);

    let current = Memo::new(move |_| {
        let sorted = sort_rows(&store.opportunities().get(), &sort.get());
        paginate(&sorted, page.get(), per_page)
    });

    let change_stage = move |id: String, value: String| {
        let Ok(stage) = value.parse::<Stage>() else {
            log::warn!("ignoring unknown stage {}", value);
            return;
        };
        match commands::update_opportunity_stage(ctx, store, &id, stage) {
            Ok(_) => ctx.notify_success("Opportunity updated"),
            Err(e) => ctx.notify_error(e.to_string()),
        }
    };

    view! {
        <section class="opportunities">
            <h2>"Opportunities"</h2>
            <Show
                when=move || !store.opportunities().read().is_empty()
                fallback=|| view! {
                    <p class="empty-state">"No opportunities yet. Convert a lead to create one."</p>
                }
            >
                <div class="table-container">
                    <table class="data-table opportunities-table">
                        <SortableHeader columns=&OPPORTUNITY_COLUMNS sort=sort trailing="Actions" />
                        <tbody>
                            <For
                                each=move || current.get().items
                                key=|o| (o.id.clone(), o.stage, o.updated_at.clone())
                                children=move |o| {
                                    let id = o.id.clone();
                                    let delete_id = o.id.clone();
                                    let stage = o.stage;
                                    let name = o.name.clone();
                                    let stage_label = format!("Stage of {}", o.name);
                                    view! {
                                        <tr>
                                            <td class="cell-name">{o.name}</td>
                                            <td>{o.account_name}</td>
                                            <td>
                                                <select
                                                    class=stage_class(stage)
                                                    aria-label=stage_label
                                                    prop:value=stage.as_str()
                                                    on:change=move |ev| change_stage(id.clone(), event_target_value(&ev))
                                                >
                                                    {Stage::ALL.into_iter().map(|s| view! {
                                                        <option value=s.as_str() selected=s == stage>{s.as_str()}</option>
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                            <td>{format_amount(o.amount)}</td>
                                            <td>{format_date(&o.created_at)}</td>
                                            <td>
                                                <DeleteConfirmButton
                                                    label=name
                                                    on_confirm=Callback::new(move |_| {
                                                        commands::delete_opportunity(ctx, store, &delete_id);
                                                        ctx.notify_success("Opportunity deleted");
                                                    })
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
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
            </Show>
        </section>
    }
}
