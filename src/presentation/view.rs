//! Top-level frame composition: sidebar, the active main pane, status bar.

use ratatui::prelude::*;

use crate::core::state::AppState;
use crate::domain::course::ViewMode;
use crate::presentation::components::{
    assets_view::AssetsViewComponent, full_source_view::FullSourceComponent,
    lesson_view::LessonViewComponent, sidebar::SidebarComponent, status_bar::StatusBarComponent,
};

const SIDEBAR_WIDTH: u16 = 28;

pub fn render(frame: &mut Frame, state: &AppState) {
    let rows = Layout::new(
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(1)],
    )
    .split(frame.area());
    let columns = Layout::new(
        Direction::Horizontal,
        [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)],
    )
    .split(rows[0]);

    SidebarComponent::new().view(state, frame, columns[0]);
    match state.session.view_mode {
        ViewMode::Lesson => LessonViewComponent::new().view(state, frame, columns[1]),
        ViewMode::FullSource => FullSourceComponent::new().view(state, frame, columns[1]),
        ViewMode::Assets => AssetsViewComponent::new().view(state, frame, columns[1]),
    }
    StatusBarComponent::new().view(state, frame, rows[1]);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::msg::session::SessionMsg;
    use crate::domain::course::ViewMode;
    use crate::infrastructure::config::Config;

    fn render_to_string(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal
            .draw(|f| render(f, state))
            .expect("draw succeeds");
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_lesson_view_is_default() {
        let state = AppState::with_config(Config::default());
        let rendered = render_to_string(&state);
        assert!(rendered.contains("Core Curriculum"));
        assert!(rendered.contains("Lesson 1"));
    }

    #[test]
    fn test_view_mode_switches_main_pane() {
        let mut state = AppState::with_config(Config::default());
        state
            .session
            .update(SessionMsg::SetViewMode(ViewMode::Assets));
        let rendered = render_to_string(&state);
        assert!(rendered.contains("Game Assets"));
    }
}
