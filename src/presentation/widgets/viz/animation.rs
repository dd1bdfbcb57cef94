use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::animation::{AnimationViz, FRAME_COUNT};
use crate::presentation::config::styles::Styles;

/// Wing frames of the bird sprite, cycled by the animation demo.
const FRAMES: [&str; FRAME_COUNT as usize] = ["\\o ", "-o-", " o/"];

pub struct AnimationWidget<'a> {
    viz: &'a AnimationViz,
    styles: &'a Styles,
    controls: &'a str,
}

impl<'a> AnimationWidget<'a> {
    pub fn new(viz: &'a AnimationViz, styles: &'a Styles, controls: &'a str) -> Self {
        Self {
            viz,
            styles,
            controls,
        }
    }
}

impl Widget for AnimationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("animation", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width < 20 {
            return;
        }

        // The frame strip, current one highlighted.
        let mut spans = Vec::new();
        for (i, frame) in FRAMES.iter().enumerate() {
            let style = if i == self.viz.frame as usize {
                self.styles.style("viz_active")
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("[{frame}]"), style));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans)).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let status = if self.viz.playing { "playing" } else { "paused" };
        let readout = format!(
            "frame = (frame + 1) % {FRAME_COUNT} → {}  [{status}]  {}",
            self.viz.frame, self.controls
        );
        Paragraph::new(readout)
            .style(self.styles.style("viz_title"))
            .render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_play_state() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 6);
        let mut viz = AnimationViz::default();

        let mut buf = Buffer::empty(area);
        AnimationWidget::new(&viz, &styles, "").render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("playing"));

        viz.toggle();
        let mut buf = Buffer::empty(area);
        AnimationWidget::new(&viz, &styles, "").render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("paused"));
    }
}
