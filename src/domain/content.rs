//! Static curriculum content.
//!
//! The course tables are built once at startup and never mutated. Lesson
//! identifiers (`l1`..`l4`, `e1`..`e3`) are identical in both languages so
//! the active lesson survives a language toggle.

mod de;
mod en;

use lazy_static::lazy_static;

use crate::domain::course::{Course, Language, Lesson, LessonId, UiText};

lazy_static! {
    static ref COURSE_EN: Course = en::course();
    static ref COURSE_DE: Course = de::course();
    static ref UI_EN: UiText = en::ui_text();
    static ref UI_DE: UiText = de::ui_text();
}

pub fn course(lang: Language) -> &'static Course {
    match lang {
        Language::En => &COURSE_EN,
        Language::De => &COURSE_DE,
    }
}

pub fn ui_text(lang: Language) -> &'static UiText {
    match lang {
        Language::En => &UI_EN,
        Language::De => &UI_DE,
    }
}

/// Total current-lesson lookup for a language; unknown identifiers resolve
/// to the first core lesson.
pub fn resolve_lesson(lang: Language, id: &LessonId) -> &'static Lesson {
    course(lang).resolve(id)
}
