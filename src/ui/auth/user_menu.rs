//! User menu for the page header
//!
//! Shows the signed-in user with a logout action, or a sign-in link.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::SessionPhase;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let handle_logout = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            auth.logout().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <div class="user-menu">
            {move || match auth.state.with(|state| state.phase()) {
                SessionPhase::Unknown => view! {
                    <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                }
                .into_any(),
                SessionPhase::Unauthenticated => view! {
                    <A href="/login" attr:class="btn-base btn-ghost">"Sign In"</A>
                }
                .into_any(),
                SessionPhase::Authenticated => {
                    let user = auth.user();
                    let name = user
                        .as_ref()
                        .map(|user| user.username.clone())
                        .unwrap_or_else(|| "Signed in".to_string());
                    let role = user.map(|user| user.role);
                    view! {
                        <div class="flex items-center gap-3">
                            <span class="text-sm font-medium text-theme-primary">{name}</span>
                            {role.map(|role| view! {
                                <span class="role-badge" data-role=role.to_string()>
                                    {role.display_name()}
                                </span>
                            })}
                            <button
                                class="btn-base btn-ghost"
                                title="Log out"
                                on:click=handle_logout.clone()
                            >
                                <Icon name=icons::LOGOUT class="icon-btn"/>
                                <span>"Log out"</span>
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
