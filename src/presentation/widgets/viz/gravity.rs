use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::gravity::{GravityViz, ARENA_HEIGHT};
use crate::presentation::config::styles::Styles;

/// Physics sandbox view: the bird as a dot on a vertical track, with its
/// current position and velocity readout.
pub struct GravityWidget<'a> {
    viz: &'a GravityViz,
    styles: &'a Styles,
    controls: &'a str,
}

impl<'a> GravityWidget<'a> {
    pub fn new(viz: &'a GravityViz, styles: &'a Styles, controls: &'a str) -> Self {
        Self {
            viz,
            styles,
            controls,
        }
    }
}

impl Widget for GravityWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("gravity", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width < 8 {
            return;
        }

        let sky_height = inner.height.saturating_sub(2);
        let row = ((self.viz.y / ARENA_HEIGHT) * f32::from(sky_height.saturating_sub(1)))
            .clamp(0.0, f32::from(sky_height.saturating_sub(1))) as u16;
        let bird_style = if self.viz.running {
            self.styles.style("viz_active")
        } else {
            Style::default()
        };
        buf.set_string(inner.x + inner.width / 2, inner.y + row, "●", bird_style);

        // Ground line
        let ground = "▔".repeat(inner.width as usize);
        buf.set_string(inner.x, inner.y + sky_height, &ground, Style::default());

        let readout = format!(
            "y={:>5.1} vy={:>5.1}  {}",
            self.viz.y, self.viz.vy, self.controls
        );
        Paragraph::new(readout)
            .style(self.styles.style("viz_title"))
            .render(
                Rect::new(inner.x, inner.y + sky_height + 1, inner.width, 1),
                buf,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bird_and_readout() {
        let viz = GravityViz::default();
        let styles = Styles::default();
        let widget = GravityWidget::new(&viz, &styles, "[space] flap");
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains('●'));
        assert!(content.contains("vy="));
        assert!(content.contains("[space] flap"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let viz = GravityViz::default();
        let styles = Styles::default();
        let widget = GravityWidget::new(&viz, &styles, "");
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
