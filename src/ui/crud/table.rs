use crate::core::editor::{ColumnDescriptor, Record, TableRow, table_rows};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Table over a list of records
///
/// One row per record in the order given, one cell per column. The actions
/// column is rendered only when at least one of `on_edit` / `on_delete` is set.
#[component]
pub fn CrudTable<R>(
    #[prop(into)]
    records: Signal<Vec<R>>,
    columns: Vec<ColumnDescriptor<R>>,
    #[prop(optional)]
    on_edit: Option<Callback<R>>,
    #[prop(optional)]
    on_delete: Option<Callback<R>>,
    #[prop(default = "No records yet")]
    empty_text: &'static str,
) -> impl IntoView
where
    R: Record,
{
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let headers: Vec<&'static str> = columns.iter().map(|column| column.header).collect();
    let columns = StoredValue::new(columns);

    // Keyed on the whole row, record included, so any saved change re-renders
    // the row and its actions hold the current record
    let rows = move || {
        records.with(|records| columns.with_value(|columns| table_rows(records, columns)))
    };

    view! {
        <div class="crud-table-wrapper">
            <table class="crud-table">
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! { <th class="crud-th">{header}</th> })
                            .collect_view()}
                        {has_actions.then(|| view! { <th class="crud-th text-right">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key={|row: &TableRow<R>| row.clone()}
                        children={move |row: TableRow<R>| {
                            view! {
                                <tr class="crud-tr">
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <td class="crud-td">{cell}</td> })
                                        .collect_view()}
                                    {has_actions.then(|| row_actions(row.record, on_edit, on_delete))}
                                </tr>
                            }
                        }}
                    />
                </tbody>
            </table>
            <Show when=move || records.with(Vec::is_empty)>
                <p class="crud-empty">{empty_text}</p>
            </Show>
        </div>
    }
}

fn row_actions<R: Record>(
    record: R,
    on_edit: Option<Callback<R>>,
    on_delete: Option<Callback<R>>,
) -> impl IntoView {
    let edit = on_edit.map(|callback| {
        let record = record.clone();
        view! {
            <button
                type="button"
                class="btn-icon"
                title="Edit"
                on:click=move |_| callback.run(record.clone())
            >
                <Icon name=icons::EDIT class="w-4 h-4"/>
            </button>
        }
    });
    let delete = on_delete.map(|callback| {
        view! {
            <button
                type="button"
                class="btn-icon btn-icon-danger"
                title="Delete"
                on:click=move |_| callback.run(record.clone())
            >
                <Icon name=icons::TRASH class="w-4 h-4"/>
            </button>
        }
    });

    view! {
        <td class="crud-td text-right space-x-2">
            {edit}
            {delete}
        </td>
    }
}
