//! Complete-program pane
//!
//! The full Pygame Zero listing with syntax highlighting and line numbers,
//! scrolled line-by-line.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::AppState;
use crate::domain::{content, full_code::FULL_CODE};
use crate::presentation::widgets::code_block::CodeBlock;

#[derive(Debug, Clone, Default)]
pub struct FullSourceComponent;

impl FullSourceComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let ui = content::ui_text(state.session.language);

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::styled(
            ui.full_code_title.to_string(),
            styles.style("lesson_title"),
        ));
        lines.push(Line::raw(ui.full_code_desc.to_string()));
        lines.push(Line::raw(""));

        let number_style = styles.style("code_comment");
        for (i, mut code_line) in CodeBlock::new(FULL_CODE, styles).lines().into_iter().enumerate()
        {
            code_line
                .spans
                .insert(0, Span::styled(format!("{:>4} │ ", i + 1), number_style));
            lines.push(code_line);
        }

        let max_scroll = lines.len().saturating_sub(area.height as usize) as u16;
        let scroll = state.session.scroll.min(max_scroll);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn test_renders_numbered_source() {
        let state = AppState::with_config(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal
            .draw(|f| FullSourceComponent::new().view(&state, f, f.area()))
            .expect("draw succeeds");
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Full Source Code"));
        assert!(rendered.contains("1 │"));
    }
}
