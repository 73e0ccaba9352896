//! Logger setup for binaries.
//!
//! Library code logs through the `log` facade only; the host calls
//! [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
