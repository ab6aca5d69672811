//! Fixed-cadence refresh timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Runs a tick closure at a fixed period until cancelled.
///
/// The first tick fires one full period after [`Scheduler::start`], not
/// immediately. Each tick is spawned as its own task, so a slow tick never
/// holds back the next one and ticks may overlap. Cancelling stops future
/// ticks; ticks already running are left to finish. Dropping the scheduler
/// cancels it.
pub struct Scheduler {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Starts the timer on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero or if called outside a tokio runtime.
    pub fn start<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        tracing::debug!("scheduler: tick");
                        tokio::spawn(tick());
                    }
                }
            }

            tracing::debug!("scheduler: stopped");
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stops future ticks. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancels and waits for the timer task to exit.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "scheduler: timer task did not exit cleanly");
            }
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
