//! Stateless components rendering slices of AppState.

pub mod assets_view;
pub mod full_source_view;
pub mod lesson_view;
pub mod sidebar;
pub mod status_bar;
