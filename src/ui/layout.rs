//! Page chrome shared by every route: header with user menu and footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};

pub const CLINIC_NAME: &str = "PawCare Veterinary Clinic";

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-accent-primary rounded-xl flex items-center justify-center shadow-lg">
            <Icon name=icons::PAW class="w-6 h-6"/>
        </div>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo/>
                        <span class="text-xl font-bold text-theme-primary">{CLINIC_NAME}</span>
                    </A>
                    <UserMenu/>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-6 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2026 " {CLINIC_NAME} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
