//! Auth context for the component tree
//!
//! Wraps the framework-free [`AuthService`] and mirrors its session store
//! into a signal so views re-render on every transition.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::{
    Access, AuthService, Credentials, HttpClinicApi, Role, SessionState, SessionStore, User,
};

/// Auth context providing session state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session, kept in sync with the service's store
    pub state: RwSignal<SessionState>,
    service: StoredValue<AuthService<HttpClinicApi>>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    /// Reactive access check for a page restricted to `roles`
    pub fn access(&self, roles: &[Role]) -> Access {
        self.state.with(|state| state.access(roles))
    }

    pub fn home_path(&self) -> &'static str {
        self.state.with(SessionState::home_path)
    }

    /// Log in; `None` on failure, which leaves the session untouched
    pub async fn login(&self, credentials: Credentials) -> Option<User> {
        let service = self.service.get_value();
        service.login(&credentials).await
    }

    pub async fn logout(&self) {
        let service = self.service.get_value();
        service.logout().await;
    }

    /// Re-check the session with the backend
    pub async fn probe(&self) -> SessionState {
        let service = self.service.get_value();
        service.probe_status().await
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Server and client both start in the unknown phase to avoid a hydration
    // mismatch; the client probe settles it
    let store = SessionStore::new(SessionState {
        is_loading: true,
        ..SessionState::default()
    });
    let state = RwSignal::new(store.get());
    store
        .subscribe(move |snapshot: &SessionState| state.set(snapshot.clone()))
        .detach();

    let ctx = AuthContext {
        state,
        service: StoredValue::new(AuthService::new(HttpClinicApi, store)),
    };

    // Probe once the client has hydrated
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.probe().await;
        });
    });

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
