//! Email verification flow
//!
//! `Pending -> Verified` state machine with a guarded resend action. After a
//! successful resend the action stays disabled for [`RESEND_COOLDOWN_SECS`],
//! counted down in one-second ticks.

use std::time::Duration;

use leptos::logging;

use super::api::VerificationClient;
use super::error::ApiError;
use super::store::Store;
use super::timer::{CancellationToken, Timer};

/// Seconds resend stays disabled after a code was sent
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Delay between a successful verification and the completion callback
pub const COMPLETION_DELAY: Duration = Duration::from_secs(2);

const TICK: Duration = Duration::from_secs(1);

/// Verification attempt state observed by the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationState {
    pub code: String,
    pub error: Option<String>,
    pub resend_cooldown_secs: u32,
    pub verified: bool,
    pub submitting: bool,
    pub resending: bool,
    /// A new code went out since the page opened
    pub code_resent: bool,
    completion_fired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationPhase {
    Pending,
    Verified,
}

/// Outcome of a resend request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendOutcome {
    /// Guard rejected the request; nothing was sent
    Blocked,
    /// Code sent, cooldown started
    Sent,
    Failed,
}

impl VerificationState {
    pub fn phase(&self) -> VerificationPhase {
        if self.verified {
            VerificationPhase::Verified
        } else {
            VerificationPhase::Pending
        }
    }

    pub fn set_code(&mut self, code: &str) {
        self.code = code.trim().to_string();
    }

    pub fn can_submit(&self) -> bool {
        !self.verified && !self.submitting && !self.code.is_empty()
    }

    pub fn can_resend(&self) -> bool {
        !self.verified && !self.resending && self.resend_cooldown_secs == 0
    }

    /// Start a submit; returns the code to check, or `None` when not allowed
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(self.code.clone())
    }

    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.verified = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Start a resend; false while one is in flight or cooling down
    pub fn begin_resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.resending = true;
        true
    }

    pub fn finish_resend(&mut self, result: &Result<(), ApiError>) {
        self.resending = false;
        match result {
            Ok(()) => {
                self.resend_cooldown_secs = RESEND_COOLDOWN_SECS;
                self.code_resent = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Advance the cooldown by one second; returns the remaining seconds
    pub fn tick(&mut self) -> u32 {
        self.resend_cooldown_secs = self.resend_cooldown_secs.saturating_sub(1);
        self.resend_cooldown_secs
    }

    /// True exactly once, the first time it is called after verification
    pub fn take_completion(&mut self) -> bool {
        if self.verified && !self.completion_fired {
            self.completion_fired = true;
            true
        } else {
            false
        }
    }
}

/// Drives [`VerificationState`] against the auth backend
pub struct VerificationFlow<C, T> {
    email: String,
    client: C,
    timer: T,
    state: Store<VerificationState>,
}

impl<C: Clone, T: Clone> Clone for VerificationFlow<C, T> {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            client: self.client.clone(),
            timer: self.timer.clone(),
            state: self.state.clone(),
        }
    }
}

impl<C: VerificationClient, T: Timer> VerificationFlow<C, T> {
    pub fn new(email: impl Into<String>, client: C, timer: T) -> Self {
        Self {
            email: email.into(),
            client,
            timer,
            state: Store::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn store(&self) -> &Store<VerificationState> {
        &self.state
    }

    pub fn state(&self) -> VerificationState {
        self.state.get()
    }

    pub fn set_code(&self, code: &str) {
        self.state.update(|state| state.set_code(code));
    }

    /// Check the entered code
    ///
    /// On success `on_complete` runs once, [`COMPLETION_DELAY`] after the
    /// state turned verified.
    pub async fn submit_code(&self, on_complete: impl FnOnce()) -> VerificationPhase {
        let Some(code) = self.state.update(VerificationState::begin_submit) else {
            return self.state.with(VerificationState::phase);
        };

        let result = self.client.verify_code(&self.email, &code).await;
        if let Err(e) = &result {
            logging::warn!("Email verification failed: {}", e);
        }
        self.state.update(|state| state.finish_submit(&result));

        if result.is_ok() {
            self.timer.sleep(COMPLETION_DELAY).await;
            if self.state.update(VerificationState::take_completion) {
                on_complete();
            }
        }
        self.state.with(VerificationState::phase)
    }

    /// Request a new code; rejected while resending or cooling down
    pub async fn resend_code(&self) -> ResendOutcome {
        if !self.state.update(VerificationState::begin_resend) {
            return ResendOutcome::Blocked;
        }

        let result = self.client.resend_code(&self.email).await;
        if let Err(e) = &result {
            logging::warn!("Resending verification code failed: {}", e);
        }
        self.state.update(|state| state.finish_resend(&result));

        if result.is_ok() {
            ResendOutcome::Sent
        } else {
            ResendOutcome::Failed
        }
    }

    /// Count the cooldown down to zero, one tick per second
    ///
    /// Stops early when `cancel` fires, e.g. because the page was closed.
    pub async fn run_cooldown(&self, cancel: &CancellationToken) {
        while !cancel.is_cancelled() && self.state.with(|state| state.resend_cooldown_secs > 0) {
            self.timer.sleep(TICK).await;
            if cancel.is_cancelled() {
                break;
            }
            self.state.update(VerificationState::tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{Future, ready};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeVerifier {
        accepted_code: &'static str,
        resend_fails: bool,
        verify_calls: Arc<AtomicUsize>,
        resend_calls: Arc<AtomicUsize>,
    }

    impl VerificationClient for FakeVerifier {
        async fn verify_code(&self, _email: &str, code: &str) -> Result<(), ApiError> {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            if code == self.accepted_code {
                Ok(())
            } else {
                Err(ApiError::Validation("Invalid verification code".to_string()))
            }
        }

        async fn resend_code(&self, _email: &str) -> Result<(), ApiError> {
            self.resend_calls.fetch_add(1, Ordering::SeqCst);
            if self.resend_fails {
                Err(ApiError::Network("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    /// Completes immediately and records requested durations
    #[derive(Clone, Default)]
    struct InstantTimer {
        slept: Arc<Mutex<Vec<Duration>>>,
    }

    impl Timer for InstantTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.slept.lock().unwrap().push(duration);
            ready(())
        }
    }

    fn flow(verifier: FakeVerifier) -> VerificationFlow<FakeVerifier, InstantTimer> {
        VerificationFlow::new("kim@example.com", verifier, InstantTimer::default())
    }

    fn verifier() -> FakeVerifier {
        FakeVerifier {
            accepted_code: "123456",
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_success_completes_once_after_delay() {
        let flow = flow(verifier());
        let fired = AtomicUsize::new(0);

        flow.set_code("123456");
        let phase = flow
            .submit_code(|| {
                fired.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        assert_eq!(phase, VerificationPhase::Verified);

        // verified is terminal; a second submit neither calls out nor fires
        let again = flow
            .submit_code(|| {
                fired.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        assert_eq!(again, VerificationPhase::Verified);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(flow.client.verify_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*flow.timer.slept.lock().unwrap(), vec![COMPLETION_DELAY]);
    }

    #[tokio::test]
    async fn test_submit_failure_replaces_error() {
        let flow = flow(verifier());

        flow.state.update(|s| s.error = Some("old error".to_string()));
        flow.set_code("000000");
        let phase = flow.submit_code(|| panic!("must not complete")).await;

        assert_eq!(phase, VerificationPhase::Pending);
        let state = flow.state();
        assert_eq!(state.error.as_deref(), Some("Invalid verification code"));
        assert!(!state.submitting);
        assert!(flow.timer.slept.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_after_failure_clears_error() {
        let flow = flow(verifier());
        flow.set_code("111111");
        flow.submit_code(|| {}).await;
        flow.set_code(" 123456 ");
        flow.submit_code(|| {}).await;

        let state = flow.state();
        assert!(state.verified);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_empty_code_is_not_sent() {
        let flow = flow(verifier());
        let phase = flow.submit_code(|| {}).await;
        assert_eq!(phase, VerificationPhase::Pending);
        assert_eq!(flow.client.verify_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_resend_within_cooldown_is_blocked() {
        let flow = flow(verifier());

        assert_eq!(flow.resend_code().await, ResendOutcome::Sent);
        assert_eq!(flow.resend_code().await, ResendOutcome::Blocked);

        assert_eq!(flow.client.resend_calls.load(Ordering::SeqCst), 1);
        let state = flow.state();
        assert_eq!(state.resend_cooldown_secs, RESEND_COOLDOWN_SECS);
        assert!(state.code_resent);
    }

    #[test]
    fn test_resend_in_flight_is_blocked() {
        let mut state = VerificationState::default();
        assert!(state.begin_resend());
        assert!(!state.begin_resend());
        state.finish_resend(&Ok(()));
        assert!(!state.resending);
        assert!(!state.can_resend());
    }

    #[tokio::test]
    async fn test_failed_resend_does_not_start_cooldown() {
        let flow = flow(FakeVerifier {
            resend_fails: true,
            ..verifier()
        });

        assert_eq!(flow.resend_code().await, ResendOutcome::Failed);
        let state = flow.state();
        assert_eq!(state.resend_cooldown_secs, 0);
        assert_eq!(
            state.error.as_deref(),
            Some("Network error. Please try again.")
        );
        assert!(state.can_resend());
    }

    #[tokio::test]
    async fn test_cooldown_counts_down_to_zero() {
        let flow = flow(verifier());
        flow.resend_code().await;

        let observed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&observed);
        let _sub = flow.store().subscribe(move |state: &VerificationState| {
            sink.lock().unwrap().push(state.resend_cooldown_secs)
        });

        flow.run_cooldown(&CancellationToken::new()).await;

        let expected: Vec<u32> = (0..RESEND_COOLDOWN_SECS).rev().collect();
        assert_eq!(*observed.lock().unwrap(), expected);
        let slept = flow.timer.slept.lock().unwrap();
        assert_eq!(slept.len(), RESEND_COOLDOWN_SECS as usize);
        assert!(slept.iter().all(|d| *d == Duration::from_secs(1)));
        drop(slept);

        assert!(flow.state().can_resend());
        assert_eq!(flow.resend_code().await, ResendOutcome::Sent);
        assert_eq!(flow.client.resend_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cancelled_cooldown_stops_ticking() {
        let flow = flow(verifier());
        flow.resend_code().await;

        let cancel = CancellationToken::new();
        cancel.cancel();
        flow.run_cooldown(&cancel).await;

        assert_eq!(flow.state().resend_cooldown_secs, RESEND_COOLDOWN_SECS);
    }

    #[tokio::test]
    async fn test_dropped_guard_stops_cooldown() {
        let flow = flow(verifier());
        flow.resend_code().await;

        let cancel = CancellationToken::new();
        drop(cancel.clone().drop_guard());
        flow.run_cooldown(&cancel).await;

        assert!(cancel.is_cancelled());
        assert_eq!(flow.state().resend_cooldown_secs, RESEND_COOLDOWN_SECS);
        assert!(flow.timer.slept.lock().unwrap().is_empty());
    }

    #[test]
    fn test_tick_saturates_at_zero() {
        let mut state = VerificationState::default();
        assert_eq!(state.tick(), 0);
        state.resend_cooldown_secs = 2;
        assert_eq!(state.tick(), 1);
        assert_eq!(state.tick(), 0);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn test_completion_requires_verified() {
        let mut state = VerificationState::default();
        assert!(!state.take_completion());
        state.finish_submit(&Ok(()));
        assert!(state.take_completion());
        assert!(!state.take_completion());
    }
}
