//! Host integration: terminal, configuration, CLI, and the system
//! clipboard.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod tui;
