pub mod analog_clock;
pub mod date_badge;
