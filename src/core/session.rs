//! Authentication session
//!
//! One [`SessionStore`] exists per running client. It is written only by
//! [`AuthService::probe_status`], [`AuthService::login`] and
//! [`AuthService::logout`]; everything else reads or subscribes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::logging;

use super::api::AuthClient;
use super::models::{Credentials, Role, User};
use super::store::Store;

/// Authentication state shared by every consumer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    /// A status probe is in flight
    pub is_loading: bool,
    pub user: Option<User>,
}

/// Coarse phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Result of checking the session against a set of roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Pending,
    Granted,
    Denied,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Unknown
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Whether the session may open a page restricted to `roles`
    ///
    /// A session confirmed by a bare status probe has no user record; it is
    /// granted and the backend enforces authorization.
    pub fn access(&self, roles: &[Role]) -> Access {
        match self.phase() {
            SessionPhase::Unknown => Access::Pending,
            SessionPhase::Unauthenticated => Access::Denied,
            SessionPhase::Authenticated => match self.role() {
                None => Access::Granted,
                Some(role) if roles.contains(&role) => Access::Granted,
                Some(_) => Access::Denied,
            },
        }
    }

    /// Route an authenticated user lands on
    pub fn home_path(&self) -> &'static str {
        self.role().map(|role| role.home_path()).unwrap_or("/portal")
    }

    /// Page an authenticated session is sent to from the login page
    pub fn landing_path(&self) -> Option<String> {
        (self.phase() == SessionPhase::Authenticated).then(|| match &self.user {
            Some(user) => user.landing_path(),
            None => self.home_path().to_string(),
        })
    }

    fn authenticated(user: Option<User>) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user,
        }
    }

    fn unauthenticated() -> Self {
        Self::default()
    }
}

pub type SessionStore = Store<SessionState>;

/// Drives session transitions against the auth backend
pub struct AuthService<C> {
    client: C,
    store: SessionStore,
    /// Bumped by login/logout so a late probe answer cannot overwrite them
    generation: Arc<AtomicU64>,
}

impl<C: Clone> Clone for AuthService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<C: AuthClient> AuthService<C> {
    pub fn new(client: C, store: SessionStore) -> Self {
        Self {
            client,
            store,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.store.get()
    }

    /// Ask the backend whether the client already holds a session
    pub async fn probe_status(&self) -> SessionState {
        let generation = self.generation.load(Ordering::SeqCst);
        self.store.update(|state| state.is_loading = true);

        let authenticated = match self.client.status().await {
            Ok(status) => status.is_authenticated,
            Err(e) => {
                logging::warn!("Auth status check failed: {}", e);
                false
            }
        };

        self.store.update(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                // login or logout finished meanwhile; only clear the probe flag
                state.is_loading = false;
            } else if authenticated {
                let user = state.user.take();
                *state = SessionState::authenticated(user);
            } else {
                *state = SessionState::unauthenticated();
            }
        });
        self.store.get()
    }

    /// Authenticate with username and password
    ///
    /// Failure leaves the session unauthenticated and is only logged.
    pub async fn login(&self, credentials: &Credentials) -> Option<User> {
        match self.client.login(credentials).await {
            Ok(user) => {
                self.generation.fetch_add(1, Ordering::SeqCst);
                logging::log!("Logged in as {} ({})", user.username, user.role);
                self.store
                    .update(|state| *state = SessionState::authenticated(Some(user.clone())));
                Some(user)
            }
            Err(e) => {
                logging::warn!("Login failed: {}", e);
                None
            }
        }
    }

    /// End the session; local state is cleared whatever the backend says
    pub async fn logout(&self) {
        if let Err(e) = self.client.logout().await {
            logging::warn!("Logout request failed: {}", e);
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store
            .update(|state| *state = SessionState::unauthenticated());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::models::AuthStatus;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct FakeAuth {
        status: Option<bool>,
        login_user: Option<User>,
        logout_ok: bool,
        /// Holds the status answer until notified
        gate: Option<Arc<tokio::sync::Notify>>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl AuthClient for FakeAuth {
        async fn status(&self) -> Result<AuthStatus, ApiError> {
            self.calls.lock().unwrap().push("status");
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.status
                .map(|is_authenticated| AuthStatus { is_authenticated })
                .ok_or_else(|| ApiError::Network("offline".to_string()))
        }

        async fn login(&self, _credentials: &Credentials) -> Result<User, ApiError> {
            self.calls.lock().unwrap().push("login");
            self.login_user.clone().ok_or(ApiError::Status(401))
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push("logout");
            if self.logout_ok {
                Ok(())
            } else {
                Err(ApiError::Network("offline".to_string()))
            }
        }
    }

    fn admin() -> User {
        User {
            id: "u-1".to_string(),
            username: "admin".to_string(),
            email: None,
            role: Role::Admin,
            verified: true,
        }
    }

    fn service(fake: FakeAuth) -> AuthService<FakeAuth> {
        AuthService::new(fake, SessionStore::default())
    }

    fn unverified_customer() -> User {
        User {
            id: "u-2".to_string(),
            username: "kim".to_string(),
            email: Some("kim@example.com".to_string()),
            role: Role::Customer,
            verified: false,
        }
    }

    #[test]
    fn test_landing_path_only_when_authenticated() {
        assert_eq!(SessionState::default().landing_path(), None);
        let probing = SessionState {
            is_loading: true,
            ..Default::default()
        };
        assert_eq!(probing.landing_path(), None);

        let bare = SessionState::authenticated(None);
        assert_eq!(bare.landing_path().as_deref(), Some("/portal"));
        let admin = SessionState::authenticated(Some(admin()));
        assert_eq!(admin.landing_path().as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn test_unverified_login_lands_on_verification() {
        let auth = service(FakeAuth {
            login_user: Some(unverified_customer()),
            ..Default::default()
        });
        auth.login(&Credentials::new("kim", "x")).await;
        assert_eq!(
            auth.state().landing_path().as_deref(),
            Some("/verify-email?email=kim%40example.com")
        );
    }

    #[test]
    fn test_initial_state_is_unauthenticated() {
        let state = SessionState::default();
        assert_eq!(state.phase(), SessionPhase::Unauthenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_login_success_stores_user() {
        let auth = service(FakeAuth {
            login_user: Some(admin()),
            ..Default::default()
        });

        let user = auth.login(&Credentials::new("admin", "x")).await;

        assert_eq!(user.map(|u| u.role), Some(Role::Admin));
        let state = auth.state();
        assert!(state.is_authenticated);
        assert_eq!(state.role(), Some(Role::Admin));
        assert_eq!(state.phase(), SessionPhase::Authenticated);
    }

    #[tokio::test]
    async fn test_login_failure_is_silent() {
        let auth = service(FakeAuth::default());

        assert!(auth.login(&Credentials::new("admin", "wrong")).await.is_none());
        assert_eq!(auth.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        for logout_ok in [true, false] {
            let auth = service(FakeAuth {
                login_user: Some(admin()),
                logout_ok,
                ..Default::default()
            });
            auth.login(&Credentials::new("admin", "x")).await;
            auth.logout().await;

            let state = auth.state();
            assert!(!state.is_authenticated);
            assert!(state.user.is_none());
        }
    }

    #[tokio::test]
    async fn test_logout_when_already_logged_out() {
        let auth = service(FakeAuth::default());
        auth.logout().await;
        assert_eq!(auth.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_probe_authenticated() {
        let auth = service(FakeAuth {
            status: Some(true),
            ..Default::default()
        });
        let state = auth.probe_status().await;
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_probe_failure_is_unauthenticated() {
        for status in [Some(false), None] {
            let auth = service(FakeAuth {
                status,
                ..Default::default()
            });
            let state = auth.probe_status().await;
            assert_eq!(state.phase(), SessionPhase::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_probe_passes_through_unknown() {
        let auth = service(FakeAuth {
            status: Some(true),
            ..Default::default()
        });
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&phases);
        let _sub = auth
            .store()
            .subscribe(move |state: &SessionState| sink.lock().unwrap().push(state.phase()));

        auth.probe_status().await;

        assert_eq!(
            *phases.lock().unwrap(),
            vec![SessionPhase::Unknown, SessionPhase::Authenticated]
        );
    }

    #[tokio::test]
    async fn test_probe_keeps_known_user() {
        let auth = service(FakeAuth {
            status: Some(true),
            login_user: Some(admin()),
            ..Default::default()
        });
        auth.login(&Credentials::new("admin", "x")).await;
        let state = auth.probe_status().await;
        assert_eq!(state.user, Some(admin()));
    }

    #[tokio::test]
    async fn test_late_probe_does_not_override_login() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let auth = service(FakeAuth {
            status: Some(false),
            login_user: Some(admin()),
            gate: Some(Arc::clone(&gate)),
            ..Default::default()
        });

        let (probed, _) = tokio::join!(auth.probe_status(), async {
            auth.login(&Credentials::new("admin", "x")).await;
            gate.notify_one();
        });

        assert!(!probed.is_loading);
        assert!(probed.is_authenticated);
        assert_eq!(probed.user, Some(admin()));
    }

    #[tokio::test]
    async fn test_calls_reach_backend_in_order() {
        let fake = FakeAuth {
            status: Some(true),
            login_user: Some(admin()),
            logout_ok: true,
            ..Default::default()
        };
        let calls = Arc::clone(&fake.calls);
        let auth = service(fake);

        auth.probe_status().await;
        auth.login(&Credentials::new("admin", "x")).await;
        auth.logout().await;

        assert_eq!(*calls.lock().unwrap(), vec!["status", "login", "logout"]);
    }

    #[test]
    fn test_access_rules() {
        let loading = SessionState {
            is_loading: true,
            ..Default::default()
        };
        assert_eq!(loading.access(Role::BACK_OFFICE), Access::Pending);
        assert_eq!(SessionState::default().access(Role::PORTAL), Access::Denied);

        let admin_session = SessionState::authenticated(Some(admin()));
        assert_eq!(admin_session.access(Role::BACK_OFFICE), Access::Granted);
        assert_eq!(admin_session.access(Role::PORTAL), Access::Denied);
        assert_eq!(admin_session.home_path(), "/dashboard");

        let probed = SessionState::authenticated(None);
        assert_eq!(probed.access(Role::BACK_OFFICE), Access::Granted);
        assert_eq!(probed.home_path(), "/portal");
    }
}
