//! Course navigation sidebar
//!
//! Lists the core curriculum, the extras, and the two resource views.
//! Pure view over SessionState.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::AppState;
use crate::domain::{content, course::ViewMode};

#[derive(Debug, Clone, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let course = content::course(state.session.language);
        let ui = content::ui_text(state.session.language);
        let section = styles.style("sidebar_section");
        let active = styles.style("sidebar_active");

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::styled(
            format!("PyFlap [{}]", state.session.language.tag()),
            styles.style("lesson_title"),
        ));
        lines.push(Line::raw(""));

        lines.push(Line::styled(ui.curriculum, section));
        for lesson in &course.core {
            lines.push(self.lesson_line(state, lesson.number, &lesson.title, &lesson.id, active));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(ui.extras, section));
        for lesson in &course.extras {
            lines.push(self.lesson_line(state, lesson.number, &lesson.title, &lesson.id, active));
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(ui.resources, section));
        let full_source_style = if state.session.view_mode == ViewMode::FullSource {
            active
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {}", ui.full_code), full_source_style));
        let assets_style = if state.session.view_mode == ViewMode::Assets {
            active
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {}", ui.assets), assets_style));

        let block = Block::default().borders(Borders::RIGHT);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn lesson_line(
        &self,
        state: &AppState,
        number: u8,
        title: &str,
        id: &crate::domain::course::LessonId,
        active: Style,
    ) -> Line<'static> {
        let is_current =
            state.session.view_mode == ViewMode::Lesson && &state.session.lesson_id == id;
        let style = if is_current { active } else { Style::default() };
        Line::styled(format!("  {number}. {title}"), style)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::msg::session::SessionMsg;
    use crate::infrastructure::config::Config;

    fn render_to_string(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 20)).expect("test terminal");
        terminal
            .draw(|f| SidebarComponent::new().view(state, f, f.area()))
            .expect("draw succeeds");
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_lists_all_lessons() {
        let state = AppState::with_config(Config::default());
        let rendered = render_to_string(&state);
        assert!(rendered.contains("1. The Bird"));
        assert!(rendered.contains("Core Curriculum"));
        assert!(rendered.contains("Extras"));
    }

    #[test]
    fn test_language_toggle_changes_labels() {
        let mut state = AppState::with_config(Config::default());
        state.session.update(SessionMsg::ToggleLanguage);
        let rendered = render_to_string(&state);
        assert!(rendered.contains("[DE]"));
    }
}
