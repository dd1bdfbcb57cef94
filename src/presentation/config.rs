pub mod keybindings;
pub mod styles;
