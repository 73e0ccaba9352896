use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Shortest period accepted by [`Ticker::spawn`]; `tokio::time::interval` rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A periodic task scoped to the lifetime of this handle.
///
/// The callback runs once immediately and then every `period`. Ticks missed
/// because the runtime was busy are skipped rather than replayed in a burst.
/// Dropping the `Ticker` (or calling [`cancel`](Self::cancel)) stops the task
/// before its next tick.
#[derive(Debug)]
pub struct Ticker {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawns `on_tick` on `runtime` at a fixed cadence.
    pub fn spawn<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let (shutdown, mut stop) = oneshot::channel::<()>();

        let task = runtime.spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    // Resolves on an explicit stop and when the sender is dropped.
                    _ = &mut stop => break,
                    _ = interval.tick() => on_tick(),
                }
            }
        });

        Self {
            shutdown: Some(shutdown),
            task,
        }
    }

    /// Returns `true` until the task has observed cancellation and exited.
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the task. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.task.abort();
    }
}
