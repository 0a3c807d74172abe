//! Back-office dashboard
//!
//! Overview statistics plus CRUD managers for owners, pets and appointments.
//! All lists are sample data held in memory for the lifetime of the page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::mock::{self, DashboardStats};
use crate::core::{Role, forms};
use crate::ui::auth::{RequireRole, use_auth_context};
use crate::ui::common::{TabItem, Tabs};
use crate::ui::crud::CrudManager;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::notifications::NotificationsPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    let owners = RwSignal::new(mock::owners());
    let pets = RwSignal::new(mock::pets());
    let appointments = RwSignal::new(mock::appointments());

    let stats = Memo::new(move |_| {
        owners.with(|owners| {
            pets.with(|pets| {
                appointments.with(|appointments| DashboardStats::compute(owners, pets, appointments))
            })
        })
    });

    let active_tab = RwSignal::new("overview");
    let tabs = vec![
        TabItem::new("overview", "Overview").with_icon(icons::CHART),
        TabItem::new("owners", "Owners").with_icon(icons::USERS),
        TabItem::new("pets", "Pets").with_icon(icons::PAW),
        TabItem::new("appointments", "Appointments").with_icon(icons::CALENDAR),
        TabItem::new("notifications", "Notifications").with_icon(icons::BELL),
    ];

    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome back, {}", user.username))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <Title text="Dashboard"/>
        <RequireRole roles=Role::BACK_OFFICE>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <SiteHeader/>
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                    <h1 class="text-2xl font-bold text-theme-primary">{greeting}</h1>
                    <Tabs tabs=tabs.clone() active_tab=active_tab/>
                    {move || match active_tab.get() {
                        "owners" => view! {
                            <CrudManager
                                title="Owners"
                                records=owners
                                fields=forms::owner_fields()
                                columns=forms::owner_columns()
                                add_label="Add owner"
                            />
                        }
                        .into_any(),
                        "pets" => view! {
                            <CrudManager
                                title="Pets"
                                records=pets
                                fields=forms::pet_fields()
                                columns=forms::pet_columns()
                                add_label="Add pet"
                            />
                        }
                        .into_any(),
                        "appointments" => view! {
                            <CrudManager
                                title="Appointments"
                                records=appointments
                                fields=forms::appointment_fields()
                                columns=forms::appointment_columns()
                                add_label="New appointment"
                            />
                        }
                        .into_any(),
                        "notifications" => view! { <NotificationsPanel/> }.into_any(),
                        _ => view! { <Overview stats=stats/> }.into_any(),
                    }}
                </main>
                <SiteFooter/>
            </div>
        </RequireRole>
    }
}

#[component]
fn Overview(stats: Memo<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard icon=icons::USERS label="Owners" value=Signal::derive(move || stats.get().owners)/>
            <StatCard icon=icons::PAW label="Pets" value=Signal::derive(move || stats.get().pets)/>
            <StatCard
                icon=icons::CALENDAR
                label="Next clinic day"
                value=Signal::derive(move || stats.get().appointments_on_first_day)
            />
            <StatCard
                icon=icons::CLIPBOARD
                label="Pending appointments"
                value=Signal::derive(move || stats.get().pending_appointments)
            />
        </div>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="card p-6 flex items-center gap-4">
            <div class="w-12 h-12 rounded-xl bg-theme-secondary flex items-center justify-center">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <div>
                <p class="text-sm text-theme-secondary">{label}</p>
                <p class="text-2xl font-bold text-theme-primary">{move || value.get()}</p>
            </div>
        </div>
    }
}
