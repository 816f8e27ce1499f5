//! `setTimeout`-backed timer.

use platform_host::{TimerFuture, TimerService};

#[derive(Debug, Clone, Copy, Default)]
/// Timer resolving through `window.setTimeout`.
pub struct WebTimer;

impl TimerService for WebTimer {
    fn sleep_ms(&self, ms: u32) -> TimerFuture<'_> {
        Box::pin(sleep_ms(ms))
    }
}

/// Resolves after `ms` milliseconds. Resolves immediately when no window is available.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        use futures::channel::oneshot;
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let (tx, rx) = oneshot::channel::<()>();
        let on_timeout = Closure::once(move || {
            let _ = tx.send(());
        });
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                timeout,
            )
            .is_err()
        {
            return;
        }
        let _ = rx.await;
        drop(on_timeout);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ms;
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_sleep_resolves_immediately() {
        block_on(WebTimer.sleep_ms(500));
    }
}
