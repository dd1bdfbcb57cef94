//! Rendering: stateless components, reusable widgets, and the
//! configuration types they read (keybindings, styles).

pub mod components;
pub mod config;
pub mod view;
pub mod widgets;
