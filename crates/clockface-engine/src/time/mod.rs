//! Time subsystem.
//!
//! - [`WallClock`]: fallible source of local wall-clock time
//! - [`Ticker`]: cancellable periodic task on a tokio runtime
//! - [`host_locale`]: locale used for date formatting

mod locale;
mod ticker;
mod wall_clock;

pub use locale::{host_locale, parse_locale};
pub use ticker::Ticker;
pub use wall_clock::{FixedWallClock, SystemWallClock, WallClock, WallClockError};
