//! Timing primitives for the verification flow.
//!
//! Cancellation uses [`tokio_util::sync::CancellationToken`], re-exported
//! here so the flow and its component share one type.

use std::future::Future;
use std::time::Duration;

pub use tokio_util::sync::{CancellationToken, DropGuard};

/// Asynchronous sleep
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Timer of the running platform: browser timeouts on the client, tokio on
/// the server
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTimer;

#[cfg(not(feature = "ssr"))]
impl Timer for PlatformTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

#[cfg(feature = "ssr")]
impl Timer for PlatformTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_platform_timer_sleeps() {
        let start = std::time::Instant::now();
        PlatformTimer.sleep(Duration::from_millis(5)).await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
