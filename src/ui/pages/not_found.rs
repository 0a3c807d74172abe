//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::CLINIC_NAME;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::PAW class="w-12 h-12 text-theme-tertiary" />
                </div>

                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-theme-primary mb-2">
                    "Page Not Found"
                </h2>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-base btn-primary">"Go Home"</A>
                    <Show when=move || auth.is_authenticated()>
                        <A href=move || auth.home_path().to_string() attr:class="btn-base btn-secondary">
                            "My Account"
                        </A>
                    </Show>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-theme-tertiary">"© 2026 " {CLINIC_NAME}</p>
            </div>
        </div>
    }
}
