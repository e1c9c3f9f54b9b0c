use leptos::{
    component, create_memo, create_signal, ev::MouseEvent, view, CollectView, IntoView, Signal,
    SignalGet, SignalSet, SignalUpdate, SignalWith,
};
use shared::{
    plans::PlansState,
    table::{Cell, Column, PlanRow, QuotaDisplay, SortDirection, SortOrder, TableView},
};

fn row_view(row: &PlanRow) -> impl IntoView {
    Column::ALL
        .into_iter()
        .map(|column| match row.cell(column) {
            Cell::Text(text) => {
                let text = text.to_owned();
                view! { <td>{text}</td> }.into_view()
            }
            Cell::Control { label, enabled } => {
                let label = label.to_owned();
                view! { <td><button type="button" disabled={!enabled}>{label}</button></td> }
                    .into_view()
            }
        })
        .collect_view()
}

/// Paginated, sortable plans table with a fixed column layout
#[component]
pub fn PlanTable(
    #[prop(into)] state: Signal<PlansState>,
    #[prop(into)] quota_display: Signal<QuotaDisplay>,
) -> impl IntoView {
    let (sort, set_sort) = create_signal(None::<SortOrder>);
    let (page, set_page) = create_signal(0usize);

    let table = create_memo(move |_| {
        state.with(|state| {
            TableView::new(state.plans(), sort.get(), page.get(), quota_display.get())
        })
    });

    let header = Column::ALL
        .into_iter()
        .map(|column| {
            let width = format!("{}px", column.width());
            if column.sortable() {
                let indicator = move || match sort.get() {
                    Some(SortOrder { column: c, direction }) if c == column => match direction {
                        SortDirection::Ascending => " ▲",
                        SortDirection::Descending => " ▼",
                    },
                    _ => "",
                };
                view! {
                    <th style:width=width>
                        <button
                            type="button"
                            class="sort"
                            on:click=move |_| {
                                set_sort.update(|sort| *sort = SortOrder::toggle(*sort, column));
                                set_page.set(0);
                            }
                        >
                            {column.header()}
                            {indicator}
                        </button>
                    </th>
                }
                .into_view()
            } else {
                view! { <th style:width=width>{column.header()}</th> }.into_view()
            }
        })
        .collect_view();

    let failure = move || {
        state.with(|state| {
            state.failure().map(|message| {
                let message = message.to_owned();
                view! { <p class="error" role="alert">"Failed to load plans: "{message}</p> }
            })
        })
    };

    let rows = move || {
        table.with(|table| {
            table
                .rows
                .iter()
                .map(|row| view! { <tr data-tier={row.id.clone()}>{row_view(row)}</tr> })
                .collect_view()
        })
    };

    let pager = create_memo(move |_| table.with(TableView::pager));

    let previous = move |_: MouseEvent| set_page.update(|page| *page = page.saturating_sub(1));
    let next = move |_: MouseEvent| {
        let last = table.with(|table| table.page_count - 1);
        set_page.update(|page| *page = (*page + 1).min(last));
    };

    view! {
        <div class="plan-table">
            {failure}
            <table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="pager">
                <label>
                    "Rows per page: "
                    <select>
                        {move || {
                            let current = pager.get();
                            current
                                .page_size_options
                                .iter()
                                .map(|&size| {
                                    view! {
                                        <option
                                            value={size.to_string()}
                                            selected={size == current.page_size}
                                        >
                                            {size}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <span>{move || pager.with(|pager| pager.range_label.clone())}</span>
                <button
                    type="button"
                    disabled=move || !pager.with(|pager| pager.previous_enabled)
                    on:click=previous
                >
                    "‹"
                </button>
                <button
                    type="button"
                    disabled=move || !pager.with(|pager| pager.next_enabled)
                    on:click=next
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
