use std::sync::Arc;
use std::time::Duration;

use clockface_engine::time::{Ticker, WallClock, WallClockError};
use tokio::runtime::Handle;
use tokio::sync::watch;

use super::state::ClockState;

/// Sampling cadence of the clock hands.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Reads the wall clock and turns it into [`ClockState`] snapshots.
pub struct TimeSampler {
    clock: Arc<dyn WallClock>,
    period: Duration,
}

impl TimeSampler {
    pub fn new(clock: Arc<dyn WallClock>) -> Self {
        Self {
            clock,
            period: TICK_PERIOD,
        }
    }

    #[cfg(test)]
    pub(crate) fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Takes one sample synchronously.
    pub fn sample(&self) -> Result<ClockState, WallClockError> {
        let now = self.clock.now()?;
        Ok(ClockState::from_time(&now))
    }

    /// Starts sampling on `runtime` and returns the subscription handle.
    ///
    /// The first sample is taken immediately. A failed read keeps the last
    /// published snapshot and the loop carries on with the next tick.
    pub fn spawn(self, runtime: &Handle) -> ClockHandle {
        let (tx, rx) = watch::channel(ClockState::default());
        let period = self.period;

        let ticker = Ticker::spawn(runtime, period, move || match self.sample() {
            Ok(state) => {
                tx.send_if_modified(|current| {
                    let changed = *current != state;
                    *current = state;
                    changed
                });
            }
            Err(err) => log::warn!("clock read failed, keeping last state: {err}"),
        });

        log::debug!("clock sampler started, period {period:?}");
        ClockHandle { state: rx, ticker }
    }
}

/// Owner of a running sampler.
///
/// Readers get whole snapshots through [`state`](Self::state) or a
/// [`subscribe`](Self::subscribe)d receiver. Dropping the handle stops the
/// sampler; subscribed receivers then observe a closed channel.
#[derive(Debug)]
pub struct ClockHandle {
    state: watch::Receiver<ClockState>,
    ticker: Ticker,
}

impl ClockHandle {
    /// The latest published snapshot.
    #[inline]
    pub fn state(&self) -> ClockState {
        *self.state.borrow()
    }

    /// A receiver that wakes on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ClockState> {
        self.state.clone()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stops sampling. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        log::debug!("clock sampler stopped");
    }
}
