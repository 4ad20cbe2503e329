//! Logging setup for Sweetshop binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init_logging`]
//! once at startup to decide where and how those events are written.

mod logging;

pub use logging::*;
