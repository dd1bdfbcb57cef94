//! Domain logic
//!
//! This module contains domain-specific types and data:
//! - Course model (languages, lessons, steps, view modes)
//! - Static bilingual curriculum content
//! - Game asset catalog
//! - Text processing utilities

pub mod assets;
pub mod content;
pub mod course;
pub mod full_code;
pub mod text;
