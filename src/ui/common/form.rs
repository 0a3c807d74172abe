use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Label with optional required marker
#[component]
fn FieldLabel(label: String, required: bool, #[prop(into)] for_id: String) -> impl IntoView {
    view! {
        <label class="label" for=for_id>
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <div class="flex items-center text-sm text-theme-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Input name, also used as element id
    name: &'static str,
    /// Field label text
    label: String,
    /// Whether field is required (native constraint + red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, date, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required for_id=name/>
            <input
                id=name
                name=name
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            <FieldError error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    name: &'static str,
    label: String,
    #[prop(default = false)]
    required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required for_id=name/>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    name: &'static str,
    label: String,
    #[prop(default = false)]
    required: bool,
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required for_id=name/>
            <select
                id=name
                name=name
                class="select-base"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=disabled
            >
                {options.iter().map(|(val, text)| {
                    view! {
                        <option value=*val>{*text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
