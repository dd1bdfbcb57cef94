use serde::{Deserialize, Serialize};

use crate::domain::course::{LessonId, ViewMode};

/// Messages specific to SessionState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMsg {
    // Lesson navigation
    SelectLesson(LessonId),
    NextLesson,
    PrevLesson,

    // Presentation
    SetViewMode(ViewMode),
    ToggleLanguage,
    ScrollUp,
    ScrollDown,

    // Clipboard export of the visible code
    CopySnippet,
}

impl SessionMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SessionMsg::ScrollUp | SessionMsg::ScrollDown)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;

    #[test]
    fn test_session_msg_frequent_detection() {
        assert!(SessionMsg::ScrollDown.is_frequent());
        assert!(!SessionMsg::ToggleLanguage.is_frequent());
    }

    #[test]
    fn test_session_msg_serialization() -> Result<()> {
        let msg = SessionMsg::SelectLesson(LessonId::new("l3"));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SessionMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
