//! Fixed-interval refresh loop driving the dashboard.
//!
//! The loop is sequential: it awaits one refresh, sleeps for the interval,
//! and goes again. Cycle N+1 therefore never starts before cycle N's work
//! and delay have both finished, so cycles cannot overlap even when a fetch
//! is slow. There is no jitter, no backoff, and no iteration cap; the loop
//! ends only when its task is dropped (navigating away from the page).
//!
//! The producer is responsible for containing its own failures — it always
//! resolves, and a cycle that went wrong simply leaves state untouched until
//! the next one.

use std::future::Future;

use super::timing;

/// Delay between refresh cycles.
pub const POLL_INTERVAL_MS: u64 = 10_000;

/// Runs `producer` immediately, then forever at `interval_ms` spacing.
pub async fn poll<F, Fut>(mut producer: F, interval_ms: u64)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        producer().await;
        timing::sleep_ms(interval_ms).await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_cycle_runs_immediately_and_spacing_honors_interval() {
        let starts: Rc<RefCell<Vec<Instant>>> = Rc::new(RefCell::new(Vec::new()));
        let recorded = starts.clone();

        let loop_future = poll(
            move || {
                recorded.borrow_mut().push(Instant::now());
                async {}
            },
            10_000,
        );

        // Bound the endless loop to a window wide enough for several cycles.
        let _ = tokio::time::timeout(Duration::from_millis(35_000), loop_future).await;

        let starts = starts.borrow();
        assert!(starts.len() >= 3, "expected several cycles, got {}", starts.len());

        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(10_000));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failing_refreshes_do_not_stop_the_loop() {
        let attempts = Rc::new(RefCell::new(0u32));
        let counted = attempts.clone();

        // The producer contains its own failure, the way the dashboard's
        // refresh does: the error is observed and swallowed, never raised.
        let loop_future = poll(
            move || {
                *counted.borrow_mut() += 1;
                async {
                    let outcome: Result<(), &str> = Err("connection refused");
                    let _ = outcome;
                }
            },
            10_000,
        );

        let _ = tokio::time::timeout(Duration::from_millis(25_000), loop_future).await;

        assert!(*attempts.borrow() >= 2);
    }
}
