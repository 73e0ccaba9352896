use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};

/// Failure to read the current local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallClockError {
    /// The system clock reports a time before the Unix epoch.
    BeforeEpoch,
    /// The timestamp cannot be mapped to a local date-time.
    Unrepresentable { secs: i64 },
}

impl fmt::Display for WallClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallClockError::BeforeEpoch => write!(f, "system clock is set before the unix epoch"),
            WallClockError::Unrepresentable { secs } => {
                write!(f, "timestamp {secs} has no local representation")
            }
        }
    }
}

impl std::error::Error for WallClockError {}

/// Source of local wall-clock time.
///
/// Implementations must be cheap to call; samplers read them every tick.
pub trait WallClock: Send + Sync + 'static {
    fn now(&self) -> Result<DateTime<Local>, WallClockError>;
}

/// The operating system clock in the host time zone.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now(&self) -> Result<DateTime<Local>, WallClockError> {
        let since = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| WallClockError::BeforeEpoch)?;
        let secs = i64::try_from(since.as_secs())
            .map_err(|_| WallClockError::Unrepresentable { secs: i64::MAX })?;

        Local
            .timestamp_opt(secs, since.subsec_nanos())
            .single()
            .ok_or(WallClockError::Unrepresentable { secs })
    }
}

/// A clock frozen at one instant. Useful for previews and tests.
#[derive(Debug, Copy, Clone)]
pub struct FixedWallClock(pub DateTime<Local>);

impl WallClock for FixedWallClock {
    fn now(&self) -> Result<DateTime<Local>, WallClockError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn system_clock_reads_current_year() {
        let now = SystemWallClock.now().unwrap();
        assert!(now.year() >= 2024);
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let at = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).single().unwrap();
        let clock = FixedWallClock(at);
        assert_eq!(clock.now().unwrap().minute(), 30);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            WallClockError::BeforeEpoch.to_string(),
            "system clock is set before the unix epoch"
        );
        let err = WallClockError::Unrepresentable { secs: 7 };
        assert!(err.to_string().contains('7'));
    }
}
