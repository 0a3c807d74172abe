use crate::core::editor::{EntityForm, FieldDescriptor, InputKind, Record};
use crate::ui::common::{Button, ButtonVariant, FormField, SelectField, TextAreaField};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Form editing a draft copy of `initial`
///
/// `on_submit` receives `initial` merged with every edit; `on_cancel`
/// discards them. Either fires at most once per mounted form.
#[component]
pub fn CrudForm<R>(
    initial: R,
    fields: Vec<FieldDescriptor<R>>,
    on_submit: Callback<R>,
    on_cancel: Callback<()>,
    #[prop(default = "Save")]
    submit_label: &'static str,
    #[prop(optional)]
    title: Option<&'static str>,
) -> impl IntoView
where
    R: Record,
{
    let form = RwSignal::new(EntityForm::new(initial, fields.clone()));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        form.update(|form| submitted = form.submit());
        if let Some(record) = submitted {
            on_submit.run(record);
        }
    };

    let handle_cancel = Callback::new(move |_: ()| {
        let mut cancelled = false;
        form.update(|form| cancelled = form.cancel());
        if cancelled {
            on_cancel.run(());
        }
    });

    view! {
        <form class="crud-form space-y-4" on:submit=handle_submit>
            {title.map(|title| view! { <h3 class="crud-form-title">{title}</h3> })}
            {fields.into_iter().map(|field| render_field(form, field)).collect_view()}
            <div class="flex justify-end gap-2 pt-2">
                <Button variant=ButtonVariant::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
                <Button button_type="submit">{submit_label}</Button>
            </div>
        </form>
    }
}

fn render_field<R: Record>(form: RwSignal<EntityForm<R>>, field: FieldDescriptor<R>) -> AnyView {
    let key = field.key;
    let label = field.label.to_string();
    let required = field.required;
    let value = Signal::derive(move || form.with(|form| form.value(key)));
    let on_input = Callback::new(move |value: String| {
        form.update(|form| {
            form.edit(key, value);
        })
    });

    match field.kind {
        InputKind::TextArea => view! {
            <TextAreaField name=key label=label required=required value=value on_input=on_input/>
        }
        .into_any(),
        InputKind::Select(options) => view! {
            <SelectField
                name=key
                label=label
                required=required
                value=value
                on_change=on_input
                options=options
            />
        }
        .into_any(),
        kind => view! {
            <FormField
                name=key
                label=label
                required=required
                input_type=kind.input_type()
                value=value
                on_input=on_input
            />
        }
        .into_any(),
    }
}
