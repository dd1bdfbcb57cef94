//! Main lesson pane
//!
//! Renders the open lesson as a scrollable body (goal, concept, steps with
//! highlighted snippets) and, below it, the live demo widgets embedded by
//! the lesson.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::AppState;
use crate::domain::{content, course::{Lesson, UiText, VizKind}, text};
use crate::presentation::widgets::{
    code_block::CodeBlock,
    viz::{
        AnimationWidget, CollisionWidget, GameStatesWidget, GravityWidget, PipesWidget,
        ScrollingWidget,
    },
};

/// Height reserved for the demo strip below the text body.
const VIZ_PANEL_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Default)]
pub struct LessonViewComponent;

impl LessonViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let lesson = state.session.current_lesson();
        let mounted = state.viz.mounted_kinds();

        let (text_area, viz_area) = if mounted.is_empty() || area.height <= VIZ_PANEL_HEIGHT + 4 {
            (area, None)
        } else {
            let split = Layout::new(
                Direction::Vertical,
                [Constraint::Min(0), Constraint::Length(VIZ_PANEL_HEIGHT)],
            )
            .split(area);
            (split[0], Some(split[1]))
        };

        let lines = self.body_lines(state, lesson, text_area.width.saturating_sub(2) as usize);
        // Scrolling is element-based: one line per scroll step, clamped so
        // the last page stays full.
        let max_scroll = lines.len().saturating_sub(text_area.height as usize) as u16;
        let scroll = state.session.scroll.min(max_scroll);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), text_area);

        if let Some(viz_area) = viz_area {
            self.render_viz_strip(state, frame, viz_area, &mounted);
        }
    }

    fn body_lines(&self, state: &AppState, lesson: &Lesson, width: usize) -> Vec<Line<'static>> {
        let styles = &state.config.config.styles;
        let ui = content::ui_text(state.session.language);
        let width = width.max(16);

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::styled(
            format!("{} {}: {}", ui.lesson_label, lesson.number, lesson.title),
            styles.style("lesson_title"),
        ));
        lines.push(Line::raw(""));

        for wrapped in text::wrap_text(&format!("{}: {}", ui.goal, lesson.goal), width) {
            lines.push(Line::styled(wrapped, styles.style("lesson_goal")));
        }
        for wrapped in text::wrap_text(&format!("{}: {}", ui.concept, lesson.concept), width) {
            lines.push(Line::styled(wrapped, styles.style("lesson_concept")));
        }
        lines.push(Line::raw(""));

        for step in &lesson.steps {
            lines.push(Line::styled(
                format!("▸ {}", step.title),
                styles.style("sidebar_section"),
            ));
            for wrapped in text::wrap_text(&step.description, width) {
                lines.push(Line::raw(format!("  {wrapped}")));
            }
            if let Some(snippet) = &step.snippet {
                lines.push(Line::raw(""));
                for mut code_line in CodeBlock::new(snippet, styles).lines() {
                    code_line.spans.insert(0, Span::raw("    "));
                    lines.push(code_line);
                }
            }
            lines.push(Line::raw(""));
        }

        for wrapped in text::wrap_text(&format!("{} {}", ui.tip, ui.tip_text), width) {
            lines.push(Line::styled(wrapped, styles.style("lesson_concept")));
        }

        lines.push(Line::raw(""));
        lines.push(self.footer_line(state, lesson, ui));
        lines
    }

    /// Prev/next footer; the marker at a sequence end renders dimmed since
    /// stepping past it does nothing.
    fn footer_line(&self, state: &AppState, lesson: &Lesson, ui: &UiText) -> Line<'static> {
        let course = content::course(state.session.language);
        let position = course.position(&lesson.id).unwrap_or(0);
        let disabled = Style::default().add_modifier(Modifier::DIM);
        let prev_style = if position == 0 {
            disabled
        } else {
            Style::default()
        };
        let next_style = if position + 1 >= course.len() {
            disabled
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("← [p] {}", ui.prev), prev_style),
            Span::raw("    "),
            Span::styled(format!("[n] {} →", ui.next), next_style),
        ])
    }

    fn render_viz_strip(
        &self,
        state: &AppState,
        frame: &mut Frame,
        area: Rect,
        mounted: &[VizKind],
    ) {
        let styles = &state.config.config.styles;
        let constraints =
            vec![Constraint::Ratio(1, mounted.len().max(1) as u32); mounted.len().max(1)];
        let slots = Layout::new(Direction::Horizontal, constraints).split(area);

        for (slot, kind) in slots.iter().zip(mounted) {
            match kind {
                VizKind::Gravity => {
                    if let Some(viz) = &state.viz.gravity {
                        frame.render_widget(
                            GravityWidget::new(viz, styles, "[space] flap  [r] reset"),
                            *slot,
                        );
                    }
                }
                VizKind::Scrolling => {
                    if let Some(viz) = &state.viz.scrolling {
                        frame.render_widget(ScrollingWidget::new(viz, styles), *slot);
                    }
                }
                VizKind::Pipes => {
                    if let Some(viz) = &state.viz.pipes {
                        frame.render_widget(PipesWidget::new(viz, styles, "[s] spawn"), *slot);
                    }
                }
                VizKind::Collision => {
                    if let Some(viz) = &state.viz.collision {
                        frame.render_widget(
                            CollisionWidget::new(viz, styles, "[h/l/u/d] move"),
                            *slot,
                        );
                    }
                }
                VizKind::Animation => {
                    if let Some(viz) = &state.viz.animation {
                        frame.render_widget(
                            AnimationWidget::new(viz, styles, "[m] play/pause"),
                            *slot,
                        );
                    }
                }
                VizKind::States => {
                    if let Some(viz) = &state.viz.game_states {
                        frame.render_widget(
                            GameStatesWidget::new(viz, styles, "[space] advance  [x] collide"),
                            *slot,
                        );
                    }
                }
            }
        }
    }
}
