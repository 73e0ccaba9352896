use chrono::Timelike;

/// First hour of day (24 h clock) rendered with the day palette.
pub const DAY_START_HOUR: u32 = 6;
/// Last hour of day (24 h clock, inclusive) rendered with the day palette.
pub const DAY_END_HOUR: u32 = 18;

/// Snapshot of the hand angles and theme at one sampling tick.
///
/// Angles are in degrees, `[0, 360)`, measured clockwise from 12 o'clock as
/// the hands are drawn. Each angle carries the fraction of its faster
/// sub-unit, so hands sweep instead of stepping.
///
/// Snapshots are replaced whole; readers never see a mix of two ticks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockState {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    pub is_day: bool,
}

impl Default for ClockState {
    /// The mount-time state: all hands at zero, day palette.
    fn default() -> Self {
        Self {
            hour_angle: 0.0,
            minute_angle: 0.0,
            second_angle: 0.0,
            is_day: true,
        }
    }
}

impl ClockState {
    /// Derives hand angles and the day flag from a local time of day.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Leap seconds arrive as nanosecond >= 1e9; pin them to the last millisecond.
        let millis = (time.nanosecond() / 1_000_000).min(999);

        let angle_millis = f64::from(millis) / 1000.0 * 360.0;
        let second_angle = f64::from(time.second()) / 60.0 * 360.0 + angle_millis / 60.0;
        let minute_angle = f64::from(time.minute()) / 60.0 * 360.0 + second_angle / 60.0;
        let hour_angle = f64::from(time.hour() % 12) / 12.0 * 360.0 + minute_angle / 12.0;

        Self {
            hour_angle,
            minute_angle,
            second_angle,
            is_day: is_day(time.hour()),
        }
    }
}

/// Day palette applies from 06:00 through the whole 18:xx hour.
#[inline]
pub fn is_day(hour_of_day: u32) -> bool {
    (DAY_START_HOUR..=DAY_END_HOUR).contains(&hour_of_day)
}
