use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::pipes::{PipesViz, SPAWN_X};
use crate::presentation::config::styles::Styles;

/// Pipe-list view: every live pipe as a column pair with a flight gap,
/// plus the list itself as data.
pub struct PipesWidget<'a> {
    viz: &'a PipesViz,
    styles: &'a Styles,
    controls: &'a str,
}

impl<'a> PipesWidget<'a> {
    pub fn new(viz: &'a PipesViz, styles: &'a Styles, controls: &'a str) -> Self {
        Self {
            viz,
            styles,
            controls,
        }
    }
}

impl Widget for PipesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("pipes", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || inner.width < 8 {
            return;
        }

        let field_height = inner.height - 2;
        let gap_top = field_height / 3;
        let gap_bottom = gap_top + (field_height / 3).max(1);

        for pipe in self.viz.pipes() {
            // x is a percentage of the demo width; off-screen pipes are
            // simply not drawn.
            if pipe.x < 0.0 || pipe.x > SPAWN_X {
                continue;
            }
            let col = ((pipe.x / SPAWN_X) * f32::from(inner.width.saturating_sub(1))) as u16;
            for row in 0..field_height {
                if row < gap_top || row >= gap_bottom {
                    buf.set_string(
                        inner.x + col,
                        inner.y + row,
                        "█",
                        self.styles.style("viz_active"),
                    );
                }
            }
        }

        let ids: Vec<String> = self
            .viz
            .pipes()
            .iter()
            .map(|p| format!("#{}@{:.0}", p.id, p.x))
            .collect();
        let readout = format!("pipes = [{}]", ids.join(", "));
        Paragraph::new(readout)
            .style(self.styles.style("viz_title"))
            .render(
                Rect::new(inner.x, inner.y + field_height, inner.width, 1),
                buf,
            );
        Paragraph::new(self.controls)
            .style(self.styles.style("viz_title"))
            .render(
                Rect::new(inner.x, inner.y + field_height + 1, inner.width, 1),
                buf,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_lists_live_pipes() {
        let mut viz = PipesViz::default();
        viz.spawn();
        viz.step();
        viz.spawn();
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        PipesWidget::new(&viz, &styles, "[s] spawn").render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("#1@98"));
        assert!(content.contains("#2@100"));
    }
}
