use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Course language. Lesson identifiers are stable across languages, so the
/// active lesson survives a language toggle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    /// Short tag shown in the sidebar ("EN" / "DE").
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::De => "DE",
        }
    }
}

/// Which top-level panel is shown. Exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum ViewMode {
    #[default]
    Lesson,
    FullSource,
    Assets,
}

/// The six interactive visualization kinds a step can embed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum VizKind {
    Gravity,
    Scrolling,
    Pipes,
    Collision,
    Animation,
    States,
}

/// Stable lesson identifier (`l1`..`l4`, `e1`..`e3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonId(String);

impl LessonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LessonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One teaching beat within a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub snippet: Option<String>,
    pub viz: Option<VizKind>,
}

/// One curriculum unit containing ordered steps. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub number: u8,
    pub title: String,
    pub goal: String,
    pub concept: String,
    pub steps: Vec<Step>,
}

impl Lesson {
    pub fn new(
        id: &str,
        number: u8,
        title: &str,
        goal: &str,
        concept: &str,
    ) -> Self {
        Self {
            id: LessonId::new(id),
            number,
            title: title.into(),
            goal: goal.into(),
            concept: concept.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, title: &str, description: &str) -> Self {
        self.steps.push(Step {
            title: title.into(),
            description: description.into(),
            snippet: None,
            viz: None,
        });
        self
    }

    pub fn step_code(mut self, title: &str, description: &str, snippet: &str) -> Self {
        self.steps.push(Step {
            title: title.into(),
            description: description.into(),
            snippet: Some(snippet.into()),
            viz: None,
        });
        self
    }

    pub fn step_viz(
        mut self,
        title: &str,
        description: &str,
        viz: VizKind,
        snippet: Option<&str>,
    ) -> Self {
        self.steps.push(Step {
            title: title.into(),
            description: description.into(),
            snippet: snippet.map(Into::into),
            viz: Some(viz),
        });
        self
    }

    /// Visualization kinds embedded by this lesson, in step order.
    pub fn viz_kinds(&self) -> Vec<VizKind> {
        self.steps.iter().filter_map(|s| s.viz).collect()
    }

    /// All code snippets of this lesson joined by blank lines, for
    /// copy-to-clipboard.
    pub fn joined_snippets(&self) -> String {
        self.steps
            .iter()
            .filter_map(|s| s.snippet.as_deref())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The curriculum for one language: core lessons plus extras, concatenated
/// into one navigable sequence.
#[derive(Debug, Clone)]
pub struct Course {
    pub core: Vec<Lesson>,
    pub extras: Vec<Lesson>,
}

impl Course {
    /// Invariant: the core collection is never empty; lookups fall back to
    /// its first lesson.
    pub fn new(core: Vec<Lesson>, extras: Vec<Lesson>) -> Self {
        assert!(!core.is_empty(), "a course must have at least one core lesson");
        Self { core, extras }
    }

    pub fn all(&self) -> impl Iterator<Item = &Lesson> {
        self.core.iter().chain(self.extras.iter())
    }

    pub fn len(&self) -> usize {
        self.core.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> &Lesson {
        &self.core[0]
    }

    pub fn get(&self, id: &LessonId) -> Option<&Lesson> {
        self.all().find(|l| &l.id == id)
    }

    pub fn position(&self, id: &LessonId) -> Option<usize> {
        self.all().position(|l| &l.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Lesson> {
        self.all().nth(index)
    }

    /// Total lesson lookup: an unknown identifier resolves to the first core
    /// lesson instead of failing. Covers identifier divergence between
    /// languages.
    pub fn resolve(&self, id: &LessonId) -> &Lesson {
        self.get(id).unwrap_or_else(|| self.first())
    }
}

/// Language-keyed UI strings for the chrome around the lesson content.
#[derive(Debug, Clone)]
pub struct UiText {
    pub curriculum: &'static str,
    pub extras: &'static str,
    pub resources: &'static str,
    pub full_code: &'static str,
    pub assets: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub goal: &'static str,
    pub concept: &'static str,
    pub tip: &'static str,
    pub tip_text: &'static str,
    pub full_code_title: &'static str,
    pub full_code_desc: &'static str,
    pub assets_title: &'static str,
    pub assets_desc: &'static str,
    pub sprites: &'static str,
    pub audio: &'static str,
    pub download: &'static str,
    pub copied: &'static str,
    pub lesson_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new(
            vec![
                Lesson::new("l1", 1, "One", "g", "c").step("a", "d"),
                Lesson::new("l2", 2, "Two", "g", "c").step_viz(
                    "b",
                    "d",
                    VizKind::Gravity,
                    Some("x = 1"),
                ),
            ],
            vec![Lesson::new("e1", 3, "Extra", "g", "c").step_code("c", "d", "y = 2")],
        )
    }

    #[test]
    fn test_language_toggle_is_involution() {
        assert_eq!(Language::En.toggled(), Language::De);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_course_concatenates_core_and_extras() {
        let course = course();
        let ids: Vec<&str> = course.all().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l2", "e1"]);
        assert_eq!(course.len(), 3);
    }

    #[test]
    fn test_resolve_falls_back_to_first_core_lesson() {
        let course = course();
        assert_eq!(course.resolve(&"l2".into()).id, LessonId::new("l2"));
        assert_eq!(course.resolve(&"nope".into()).id, LessonId::new("l1"));
    }

    #[test]
    fn test_position_and_at_agree() {
        let course = course();
        let pos = course.position(&"e1".into()).expect("e1 exists");
        assert_eq!(pos, 2);
        assert_eq!(course.at(pos).expect("index valid").id, LessonId::new("e1"));
        assert!(course.at(99).is_none());
    }

    #[test]
    fn test_viz_kinds_and_snippets() {
        let course = course();
        let l2 = course.resolve(&"l2".into());
        assert_eq!(l2.viz_kinds(), vec![VizKind::Gravity]);
        assert_eq!(l2.joined_snippets(), "x = 1");
    }

    #[test]
    #[should_panic(expected = "at least one core lesson")]
    fn test_empty_core_is_rejected() {
        let _ = Course::new(vec![], vec![]);
    }
}
