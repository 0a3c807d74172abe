//! Notifications panel
//!
//! Loads `GET /api/notifications` once on the client and lists the result.

use leptos::prelude::*;

use crate::core::Notification;
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let notifications = RwSignal::new(None::<Vec<Notification>>);
    let error = RwSignal::new(None::<String>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::HttpClinicApi;
        use leptos::logging;
        use leptos::task::spawn_local;

        spawn_local(async move {
            match HttpClinicApi.notifications().await {
                Ok(list) => notifications.set(Some(list)),
                Err(e) => {
                    logging::warn!("Failed to load notifications: {}", e);
                    error.set(Some("Could not load notifications".to_string()));
                }
            }
        });
    });

    let unread = move || {
        notifications.with(|list| {
            list.as_ref()
                .map(|list| list.iter().filter(|n| !n.read).count())
                .unwrap_or(0)
        })
    };

    view! {
        <section class="notifications-panel card">
            <div class="flex items-center gap-2 mb-4">
                <Icon name=icons::BELL/>
                <h2 class="text-lg font-semibold text-theme-primary">"Notifications"</h2>
                <Show when=move || { unread() > 0 }>
                    <span class="badge badge-accent">{unread}</span>
                </Show>
            </div>

            <ErrorMessage error=error/>

            {move || match notifications.get() {
                None if error.with(Option::is_none) => view! { <LoadingSpinner/> }.into_any(),
                None => ().into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="text-sm text-theme-tertiary">"You're all caught up."</p>
                }
                .into_any(),
                Some(list) => view! {
                    <ul class="notification-list">
                        {list
                            .into_iter()
                            .map(|notification| view! {
                                <li class="notification-item" class:notification-unread=!notification.read>
                                    <div class="flex justify-between gap-4">
                                        <span class="font-medium text-theme-primary">{notification.title}</span>
                                        <time class="text-xs text-theme-tertiary">{notification.created_at}</time>
                                    </div>
                                    <p class="text-sm text-theme-secondary">{notification.message}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
