//! Inline banners for request outcomes

use crate::ui::{Icon, icons};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Tone {
    Error,
    Success,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Error => "error-message",
            Tone::Success => "success-message",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Error => icons::ALERT_CIRCLE,
            Tone::Success => icons::CHECK,
        }
    }

    /// ARIA role; errors interrupt screen readers, confirmations do not
    fn role(self) -> &'static str {
        match self {
            Tone::Error => "alert",
            Tone::Success => "status",
        }
    }
}

#[component]
fn Banner(tone: Tone, text: Signal<Option<String>>) -> impl IntoView {
    move || {
        text.get().map(|text| view! {
            <div class=tone.class() role=tone.role()>
                <Icon name=tone.icon() class="icon-text"/>
                <span>{text}</span>
            </div>
        })
    }
}

/// Shown while `error` holds a message
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! { <Banner tone=Tone::Error text=error/> }
}

/// Shown while `message` holds a confirmation
#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! { <Banner tone=Tone::Success text=message/> }
}
