//! Wiring between the pure core and the host: the message-queue runtime
//! and the terminal-facing application runner.

pub mod app_runner;
pub mod runtime;
