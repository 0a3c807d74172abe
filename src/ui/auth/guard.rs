use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth_context;
use crate::core::{Access, Role};
use crate::ui::common::LoadingSpinner;

/// Render `children` only for sessions allowed to open the page
///
/// Shows a spinner while the session probe runs and redirects everyone
/// else to `/login`.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    move || match auth.access(roles) {
        Access::Pending => view! { <LoadingSpinner message="Checking your session...".to_string()/> }
            .into_any(),
        Access::Granted => children().into_any(),
        Access::Denied => view! { <Redirect path="/login"/> }.into_any(),
    }
}
