//! Delay contracts used for simulated latency.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service that completes a future after a delay.
pub trait TimerService {
    /// Resolves after roughly `ms` milliseconds.
    fn sleep_ms(&self, ms: u32) -> TimerFuture<'_>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer that resolves immediately; used natively and in tests.
pub struct ImmediateTimer;

impl TimerService for ImmediateTimer {
    fn sleep_ms(&self, _ms: u32) -> TimerFuture<'_> {
        Box::pin(async {})
    }
}
