use crate::core::{cmd::Cmd, msg::session::SessionMsg};
use crate::domain::{
    content,
    course::{Language, Lesson, LessonId, ViewMode},
    full_code::FULL_CODE,
};

/// Study-session state: which lesson is open, in which language, how it is
/// presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub language: Language,
    pub view_mode: ViewMode,
    pub lesson_id: LessonId,
    pub scroll: u16,
}

impl Default for SessionState {
    fn default() -> Self {
        let language = Language::default();
        Self {
            language,
            view_mode: ViewMode::default(),
            lesson_id: content::course(language).first().id.clone(),
            scroll: 0,
        }
    }
}

impl SessionState {
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// The lesson currently on screen. Total: an unknown id falls back to
    /// the first core lesson.
    pub fn current_lesson(&self) -> &'static Lesson {
        content::resolve_lesson(self.language, &self.lesson_id)
    }

    /// Session-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SessionMsg) -> Vec<Cmd> {
        match msg {
            SessionMsg::SelectLesson(id) => {
                self.lesson_id = content::resolve_lesson(self.language, &id).id.clone();
                self.view_mode = ViewMode::Lesson;
                self.scroll = 0;
                vec![]
            }

            SessionMsg::NextLesson => {
                self.step_lesson(1);
                vec![]
            }

            SessionMsg::PrevLesson => {
                self.step_lesson(-1);
                vec![]
            }

            SessionMsg::SetViewMode(mode) => {
                if self.view_mode != mode {
                    self.view_mode = mode;
                    self.scroll = 0;
                }
                vec![]
            }

            SessionMsg::ToggleLanguage => {
                // The lesson id is shared across languages, so the open
                // lesson survives the switch.
                self.language = self.language.toggled();
                vec![]
            }

            SessionMsg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                vec![]
            }

            SessionMsg::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                vec![]
            }

            SessionMsg::CopySnippet => match self.copy_text() {
                Some(text) => vec![Cmd::CopyToClipboard { text }],
                None => vec![],
            },
        }
    }

    /// Move through the course order; a step past either end changes
    /// nothing.
    fn step_lesson(&mut self, delta: isize) {
        let course = content::course(self.language);
        let pos = course
            .position(&self.current_lesson().id)
            .unwrap_or_default();
        let target = pos as isize + delta;
        if target < 0 {
            return;
        }
        if let Some(lesson) = course.at(target as usize) {
            self.lesson_id = lesson.id.clone();
            self.scroll = 0;
        }
    }

    /// What a copy request exports in the current view, if anything.
    fn copy_text(&self) -> Option<String> {
        match self.view_mode {
            ViewMode::FullSource => Some(FULL_CODE.to_string()),
            ViewMode::Lesson => {
                let joined = self.current_lesson().joined_snippets();
                (!joined.is_empty()).then_some(joined)
            }
            ViewMode::Assets => None,
        }
    }
}
