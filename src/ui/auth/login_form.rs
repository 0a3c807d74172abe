//! Login form component
//!
//! Username/password sign-in. A rejected login leaves the session as it was
//! and the form stays open; no error is surfaced.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::Credentials;
use crate::ui::common::{Button, FormField};

/// Login form component
///
/// Success only updates the shared session; the hosting page reacts to it.
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate = move || {
        let username_ok = !username.with(|v| v.trim().is_empty());
        let password_ok = !password.with(String::is_empty);
        username_error.set((!username_ok).then(|| "Username is required".to_string()));
        password_error.set((!password_ok).then(|| "Password is required".to_string()));
        username_ok && password_ok
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || !validate() {
            return;
        }

        let credentials = Credentials::new(username.get_untracked().trim(), password.get_untracked());
        pending.set(true);

        spawn_local(async move {
            auth.login(credentials).await;
            pending.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to manage your pets and appointments"
                </p>
            </div>

            <FormField
                name="username"
                label="Username".to_string()
                required=true
                placeholder="jane.doe".to_string()
                value=username.into()
                on_input=Callback::new(move |value: String| {
                    username.set(value);
                    username_error.set(None);
                })
                error=username_error.into()
            />

            <FormField
                name="password"
                label="Password".to_string()
                required=true
                input_type="password"
                value=password.into()
                on_input=Callback::new(move |value: String| {
                    password.set(value);
                    password_error.set(None);
                })
                error=password_error.into()
            />

            <Button button_type="submit" loading=pending class="w-full".to_string()>
                "Sign In"
            </Button>
        </form>
    }
}
