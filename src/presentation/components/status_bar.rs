//! Status bar component
//!
//! One line at the bottom: lesson position and language on the left, the
//! transient copy acknowledgment or the latest error on the right.

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::AppState;
use crate::domain::{content, course::ViewMode};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let ui = content::ui_text(state.session.language);
        let course = content::course(state.session.language);

        let left = match state.session.view_mode {
            ViewMode::Lesson => {
                let lesson = state.session.current_lesson();
                let position = course.position(&lesson.id).map_or(0, |p| p + 1);
                format!(
                    " {} {}/{} · {} [{}]",
                    ui.lesson_label,
                    position,
                    course.len(),
                    lesson.title,
                    state.session.language.tag()
                )
            }
            ViewMode::FullSource => {
                format!(" {} [{}]", ui.full_code, state.session.language.tag())
            }
            ViewMode::Assets => format!(" {} [{}]", ui.assets, state.session.language.tag()),
        };

        let (right, right_style) = if state.system.copy_ack_visible() {
            (format!("{} ", ui.copied), styles.style("status_ack"))
        } else if let Some(message) = &state.system.status_message {
            (format!("{message} "), styles.style("viz_alert"))
        } else {
            (
                "[n/p] lesson · [t] EN/DE · [y] copy · [q] quit ".to_string(),
                styles.style("status_bar"),
            )
        };

        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(0), Constraint::Length(right.width() as u16)],
        )
        .split(area);

        frame.render_widget(
            Paragraph::new(left).style(styles.style("status_bar")),
            layout[0],
        );
        frame.render_widget(Paragraph::new(right).style(right_style), layout[1]);
    }
}
