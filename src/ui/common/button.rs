use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button with variants, optional icon and loading state
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// HTML button type (button, submit)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler; submit buttons usually leave it unset
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Shows a spinner and blocks clicks while true
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_classes = format!("btn-base {} {}", variant.class(), class)
        .trim()
        .to_string();

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            }
            disabled=move || disabled.get() || loading.get()
        >
            {move || if loading.get() {
                view! { <Icon name=icons::LOADER class="icon-spin"/> }.into_any()
            } else if let Some(icon_name) = icon {
                view! { <Icon name=icon_name class="icon-btn"/> }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}
