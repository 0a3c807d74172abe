//! Landing page component
//!
//! Public marketing page for the clinic:
//! - SEO meta tags
//! - Hero section with a sign-in call to action
//! - Services section
//! - Contact section

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{CLINIC_NAME, SiteFooter, SiteHeader};

const SERVICES: &[(&str, &str, &str)] = &[
    (
        icons::CLIPBOARD,
        "Check-ups & vaccinations",
        "Routine exams and vaccination plans tailored to your pet's age and lifestyle.",
    ),
    (
        icons::PAW,
        "Surgery",
        "Soft tissue and orthopedic procedures in our fully equipped operating room.",
    ),
    (
        icons::CALENDAR,
        "Online booking",
        "Book and follow your appointments from the customer portal.",
    ),
    (
        icons::DOCUMENT_TEXT,
        "Medical records",
        "Diagnoses and treatments available to you at any time.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        let target = if auth.is_authenticated() {
            auth.home_path()
        } else {
            "/login"
        };
        navigate(target, Default::default());
    };

    view! {
        <Title text=format!("{} - Care for every paw", CLINIC_NAME)/>
        <Meta
            name="description"
            content="Check-ups, vaccinations, surgery and online appointment booking for your pets."
        />

        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>

            <section class="py-24 text-center px-4">
                <h1 class="text-5xl font-bold text-theme-primary mb-6 tracking-tight">
                    "Care for every paw"
                </h1>
                <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10">
                    "Experienced veterinarians, modern equipment and an online portal to keep your pet's health on track."
                </p>
                <button class="btn-base btn-primary" on:click=on_get_started>
                    "Book an appointment"
                </button>
            </section>

            <section id="services" class="py-16 bg-theme-secondary">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-theme-primary text-center mb-12">"Our services"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {SERVICES
                            .iter()
                            .map(|(icon, title, description)| view! {
                                <ServiceCard icon=*icon title=*title description=*description/>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <ContactSection/>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card p-6">
            <Icon name=icon class="w-8 h-8 mb-4"/>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-sm text-theme-secondary">{description}</p>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 px-4">
            <div class="max-w-3xl mx-auto text-center space-y-4">
                <h2 class="text-3xl font-bold text-theme-primary">"Visit us"</h2>
                <p class="flex items-center justify-center gap-2 text-theme-secondary">
                    <Icon name=icons::MAP_PIN/>
                    "12 Meadow Lane, Springfield"
                </p>
                <p class="flex items-center justify-center gap-2 text-theme-secondary">
                    <Icon name=icons::PHONE/>
                    "+1 555 0100"
                </p>
                <p class="flex items-center justify-center gap-2 text-theme-secondary">
                    <Icon name=icons::MAIL/>
                    "hello@pawcare.example"
                </p>
            </div>
        </section>
    }
}
