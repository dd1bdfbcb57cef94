//! # PyFlap - An interactive Flappy Bird course for the terminal
//!
//! A bilingual (English/German) TUI that teaches building Flappy Bird with
//! Pygame Zero, lesson by lesson, with live demos of each game concept.
//! This library implements an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Immutable application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (clipboard, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use pyflap::core::msg::{session::SessionMsg, Msg};
//! use pyflap::core::state::AppState;
//! use pyflap::core::update::update;
//!
//! let state = AppState::default();
//! let (state, _commands) = update(Msg::Session(SessionMsg::NextLesson), state);
//! assert_eq!(state.session.lesson_id.to_string(), "l2");
//! ```

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Convenient result type used across the crate
pub type Result<T> = color_eyre::eyre::Result<T>;
