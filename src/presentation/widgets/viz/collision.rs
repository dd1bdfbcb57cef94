use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::viz::collision::{CollisionViz, ARENA_HEIGHT, ARENA_WIDTH, OBSTACLE, POINTER_SIZE};
use crate::presentation::config::styles::Styles;

/// Hitbox view: the fixed obstacle and the pointer square, drawn to scale,
/// flashing when the rectangles overlap.
pub struct CollisionWidget<'a> {
    viz: &'a CollisionViz,
    styles: &'a Styles,
    controls: &'a str,
}

impl<'a> CollisionWidget<'a> {
    pub fn new(viz: &'a CollisionViz, styles: &'a Styles, controls: &'a str) -> Self {
        Self {
            viz,
            styles,
            controls,
        }
    }

    fn to_cell(inner: Rect, x: f32, y: f32) -> (u16, u16) {
        let col = ((x / ARENA_WIDTH) * f32::from(inner.width.saturating_sub(1))).clamp(0.0, f32::from(inner.width.saturating_sub(1)));
        let row = ((y / ARENA_HEIGHT) * f32::from(inner.height.saturating_sub(1))).clamp(0.0, f32::from(inner.height.saturating_sub(1)));
        (col as u16, row as u16)
    }
}

impl Widget for CollisionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("collision", self.styles.style("viz_title")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || inner.width < 10 {
            return;
        }
        let field = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);

        // Obstacle
        let (o_left, o_top) = Self::to_cell(field, OBSTACLE.left(), OBSTACLE.top());
        let (o_right, o_bottom) = Self::to_cell(field, OBSTACLE.right(), OBSTACLE.bottom());
        for row in o_top..=o_bottom {
            for col in o_left..=o_right {
                buf.set_string(field.x + col, field.y + row, "▒", Style::default());
            }
        }

        // Pointer square
        let half = POINTER_SIZE / 2.0;
        let (p_left, p_top) = Self::to_cell(field, self.viz.x - half, self.viz.y - half);
        let (p_right, p_bottom) = Self::to_cell(field, self.viz.x + half, self.viz.y + half);
        let pointer_style = if self.viz.colliding {
            self.styles.style("viz_alert")
        } else {
            self.styles.style("viz_active")
        };
        for row in p_top..=p_bottom {
            for col in p_left..=p_right {
                buf.set_string(field.x + col, field.y + row, "█", pointer_style);
            }
        }

        let verdict = if self.viz.colliding { "HIT!" } else { "safe" };
        let readout = format!("colliderect → {verdict}  {}", self.controls);
        Paragraph::new(readout)
            .style(self.styles.style("viz_title"))
            .render(
                Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
                buf,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_verdict_follows_overlap() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 50, 14);

        let mut viz = CollisionViz::default();
        let mut buf = Buffer::empty(area);
        CollisionWidget::new(&viz, &styles, "").render(area, &mut buf);
        assert!(content(&buf).contains("safe"));

        viz.set_pointer(190.0, 150.0);
        let mut buf = Buffer::empty(area);
        CollisionWidget::new(&viz, &styles, "").render(area, &mut buf);
        assert!(content(&buf).contains("HIT!"));
    }
}
