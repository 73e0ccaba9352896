//! Clockface engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, paint, the recorded draw stream, font measurement, and the
//! wall-clock / periodic-task plumbing.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
