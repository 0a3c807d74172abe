//! Login page component
//!
//! Standalone sign-in page. Sends unverified users to email verification
//! and everyone else to their role's home.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::core::SessionState;
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::layout::{SiteFooter, SiteHeader};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    let navigate = use_navigate();

    // Covers both a session restored by the status probe and a fresh login
    Effect::new(move |_| {
        if let Some(target) = auth.state.with(SessionState::landing_path) {
            navigate(&target, Default::default());
        }
    });

    view! {
        <Title text="Sign in"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md card p-8">
                    <LoginForm/>
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
