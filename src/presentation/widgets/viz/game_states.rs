use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::game_states::{GamePhase, GameStatesViz};
use crate::presentation::config::styles::Styles;

/// State-machine view: the three phases as labeled boxes with the active
/// one highlighted.
pub struct GameStatesWidget<'a> {
    viz: &'a GameStatesViz,
    styles: &'a Styles,
    controls: &'a str,
}

impl<'a> GameStatesWidget<'a> {
    pub fn new(viz: &'a GameStatesViz, styles: &'a Styles, controls: &'a str) -> Self {
        Self {
            viz,
            styles,
            controls,
        }
    }
}

impl Widget for GameStatesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("game states", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width < 30 {
            return;
        }

        let mut spans = Vec::new();
        for (i, phase) in [GamePhase::Menu, GamePhase::Playing, GamePhase::GameOver]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" → "));
            }
            let style = if phase == self.viz.phase {
                self.styles.style("viz_active")
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {phase} "), style));
        }
        Paragraph::new(Line::from(spans)).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        Paragraph::new(self.controls)
            .style(self.styles.style("viz_title"))
            .render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_phases_are_listed() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 6);
        let viz = GameStatesViz::default();
        let mut buf = Buffer::empty(area);
        GameStatesWidget::new(&viz, &styles, "[space] start").render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Menu"));
        assert!(content.contains("Playing"));
        assert!(content.contains("GameOver"));
    }
}
