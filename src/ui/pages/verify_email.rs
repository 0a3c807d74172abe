use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::ui::auth::{EmailVerification, use_auth_context};
use crate::ui::layout::{SiteFooter, SiteHeader};

/// Email verification page, `/verify-email?email=...`
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();
    let email = move || query.with(|params| params.get("email")).unwrap_or_default();

    let navigate = use_navigate();
    let on_verified = Callback::new(move |_: ()| navigate(auth.home_path(), Default::default()));

    view! {
        <Title text="Verify your email"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    {move || {
                        let email = email();
                        if email.is_empty() {
                            view! {
                                <div class="card p-8 text-center space-y-4">
                                    <p class="text-theme-secondary">
                                        "No email address to verify. Please sign in again."
                                    </p>
                                    <A href="/login" attr:class="btn-base btn-primary">"Sign in"</A>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <EmailVerification email=email on_verified=on_verified/> }
                                .into_any()
                        }
                    }}
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
