//! Core Elm architecture implementation
//!
//! - Raw messages from the terminal and host
//! - Translation of raw messages into domain messages
//! - Application state and the pure update function
//! - Commands (side effects) and their executor

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
