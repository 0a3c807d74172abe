//! Customer portal
//!
//! Tabs for medical history, appointments with booking, the owner profile
//! and notifications. History and appointments are sample data; the
//! profile is saved with `PUT /api/owner`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::editor::upsert;
use crate::core::{Appointment, HttpClinicApi, Owner, Role, forms, mock};
use crate::ui::auth::RequireRole;
use crate::ui::common::{Button, ErrorMessage, SuccessMessage, TabItem, Tabs};
use crate::ui::crud::{CrudForm, CrudTable};
use crate::ui::icon::icons;
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::notifications::NotificationsPanel;

#[component]
pub fn PortalPage() -> impl IntoView {
    let active_tab = RwSignal::new("history");
    let tabs = vec![
        TabItem::new("history", "Medical history").with_icon(icons::CLIPBOARD),
        TabItem::new("appointments", "Appointments").with_icon(icons::CALENDAR),
        TabItem::new("profile", "Profile").with_icon(icons::USERS),
        TabItem::new("notifications", "Notifications").with_icon(icons::BELL),
    ];

    view! {
        <Title text="My pets"/>
        <RequireRole roles=Role::PORTAL>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <SiteHeader/>
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                    <Tabs tabs=tabs.clone() active_tab=active_tab/>
                    {move || match active_tab.get() {
                        "appointments" => view! { <AppointmentsTab/> }.into_any(),
                        "profile" => view! { <ProfileTab/> }.into_any(),
                        "notifications" => view! { <NotificationsPanel/> }.into_any(),
                        _ => view! { <HistoryTab/> }.into_any(),
                    }}
                </main>
                <SiteFooter/>
            </div>
        </RequireRole>
    }
}

#[component]
fn HistoryTab() -> impl IntoView {
    let records = mock::medical_history();
    view! {
        <section class="card">
            <h2 class="text-lg font-semibold text-theme-primary mb-4">"Medical history"</h2>
            <CrudTable
                records=Signal::stored(records)
                columns=forms::medical_columns()
                empty_text="No visits recorded yet"
            />
        </section>
    }
}

#[component]
fn AppointmentsTab() -> impl IntoView {
    let appointments = RwSignal::new(mock::appointments());
    let booking = RwSignal::new(false);

    let on_book = Callback::new(move |appointment: Appointment| {
        appointments.update(|list| {
            upsert(list, forms::new_booking(appointment));
        });
        booking.set(false);
    });

    view! {
        <section class="card space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-theme-primary">"Appointments"</h2>
                <Show when=move || !booking.get()>
                    <Button icon=icons::PLUS on_click=Callback::new(move |_: ()| booking.set(true))>
                        "Book appointment"
                    </Button>
                </Show>
            </div>
            <Show when=move || booking.get()>
                <CrudForm
                    initial=Appointment::default()
                    fields=forms::booking_fields()
                    on_submit=on_book
                    on_cancel=Callback::new(move |_: ()| booking.set(false))
                    submit_label="Book"
                    title="New appointment"
                />
            </Show>
            <CrudTable records=appointments columns=forms::appointment_columns()/>
        </section>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let profile = RwSignal::new(mock::owners().into_iter().next().unwrap_or_default());
    // Bumped to remount the form with a fresh draft
    let form_generation = RwSignal::new(0u32);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_save = Callback::new(move |owner: Owner| {
        saving.set(true);
        error.set(None);
        success.set(None);
        spawn_local(async move {
            match HttpClinicApi.update_owner(&owner).await {
                Ok(()) => {
                    profile.set(owner);
                    success.set(Some("Profile updated".to_string()));
                }
                Err(e) => {
                    leptos::logging::warn!("Updating owner profile failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
            form_generation.update(|generation| *generation += 1);
        });
    });
    let on_reset = Callback::new(move |_: ()| form_generation.update(|generation| *generation += 1));

    view! {
        <section class="card space-y-4">
            <div>
                <h2 class="text-lg font-semibold text-theme-primary">"Profile"</h2>
                <p class="text-sm text-theme-secondary">{move || profile.with(Owner::full_name)}</p>
            </div>
            <ErrorMessage error=error/>
            <SuccessMessage message=success/>
            {move || {
                form_generation.track();
                if saving.get() {
                    view! { <p class="text-sm text-theme-secondary">"Saving..."</p> }.into_any()
                } else {
                    view! {
                        <CrudForm
                            initial=profile.get_untracked()
                            fields=forms::owner_fields()
                            on_submit=on_save
                            on_cancel=on_reset
                            submit_label="Save profile"
                        />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
