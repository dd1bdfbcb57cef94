use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::scrolling::{ScrollingViz, WRAP};
use crate::presentation::config::styles::Styles;

/// Infinite-scroll view: a repeating ground texture shifted by the wrap
/// offset, so the seam visibly loops.
pub struct ScrollingWidget<'a> {
    viz: &'a ScrollingViz,
    styles: &'a Styles,
}

impl<'a> ScrollingWidget<'a> {
    pub fn new(viz: &'a ScrollingViz, styles: &'a Styles) -> Self {
        Self { viz, styles }
    }
}

impl Widget for ScrollingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("scrolling", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width < 4 {
            return;
        }

        // One texture segment spans the whole width; the offset percentage
        // shifts where we start sampling it.
        const TEXTURE: &[char] = &['▓', '▓', '▒', '▒', '░', '░', '▒', '▒'];
        let width = inner.width as usize;
        let shift = (self.viz.offset as usize * width) / WRAP as usize;
        let ground: String = (0..width)
            .map(|col| TEXTURE[(col + shift) % TEXTURE.len()])
            .collect();
        let ground_row = inner.y + inner.height - 2;
        buf.set_string(inner.x, ground_row, &ground, Style::default());

        let readout = format!("offset = {:>3}%", self.viz.offset);
        Paragraph::new(readout)
            .style(self.styles.style("viz_title"))
            .render(Rect::new(inner.x, ground_row + 1, inner.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_shifts_texture() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 40, 5);

        let at_zero = ScrollingViz::default();
        let mut buf_zero = Buffer::empty(area);
        ScrollingWidget::new(&at_zero, &styles).render(area, &mut buf_zero);

        let mut shifted = ScrollingViz::default();
        for _ in 0..10 {
            shifted.step();
        }
        let mut buf_shifted = Buffer::empty(area);
        ScrollingWidget::new(&shifted, &styles).render(area, &mut buf_shifted);

        assert_ne!(buf_zero, buf_shifted);
    }
}
