use crate::core::editor::{ColumnDescriptor, FieldDescriptor, Record, remove_by_key, upsert};
use crate::ui::common::Button;
use crate::ui::crud::{CrudForm, CrudTable};
use crate::ui::icon::icons;
use leptos::prelude::*;

/// Table plus create/edit form over a caller-owned record list
///
/// New records get a generated key on save; saving an existing record
/// replaces the entry with the same key.
#[component]
pub fn CrudManager<R>(
    title: &'static str,
    records: RwSignal<Vec<R>>,
    fields: Vec<FieldDescriptor<R>>,
    columns: Vec<ColumnDescriptor<R>>,
    #[prop(default = "Add")]
    add_label: &'static str,
) -> impl IntoView
where
    R: Record,
{
    let fields = StoredValue::new(fields);
    let editing = RwSignal::new(R::default());
    let form_open = RwSignal::new(false);

    let open_form = move |record: R| {
        editing.set(record);
        form_open.set(true);
    };

    let on_add = Callback::new(move |_: ()| open_form(R::default()));
    let on_edit = Callback::new(open_form);
    let on_delete = Callback::new(move |record: R| {
        records.update(|records| {
            remove_by_key(records, record.key());
        });
    });
    let on_submit = Callback::new(move |record: R| {
        records.update(|records| {
            upsert(records, record);
        });
        form_open.set(false);
    });
    let on_cancel = Callback::new(move |_: ()| form_open.set(false));

    view! {
        <section class="crud-manager card">
            <div class="crud-manager-header">
                <h2 class="crud-manager-title">{title}</h2>
                <Show when=move || !form_open.get()>
                    <Button icon=icons::PLUS on_click=on_add>{add_label}</Button>
                </Show>
            </div>
            // Re-keyed on `editing` so picking another row reseeds the draft
            {move || {
                form_open.get().then(|| {
                    let record = editing.get();
                    let title = if record.key().is_empty() { "New entry" } else { "Edit entry" };
                    view! {
                        <CrudForm
                            initial=record
                            fields=fields.get_value()
                            on_submit=on_submit
                            on_cancel=on_cancel
                            title=title
                        />
                    }
                })
            }}
            <CrudTable
                records=records
                columns=columns
                on_edit=on_edit
                on_delete=on_delete
            />
        </section>
    }
}
