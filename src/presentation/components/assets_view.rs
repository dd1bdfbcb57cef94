//! Asset catalog pane
//!
//! Lists the sprite and audio files the finished game needs, with the
//! project-relative paths to place them at.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::AppState;
use crate::domain::{assets::AssetCategory, content};

#[derive(Debug, Clone, Default)]
pub struct AssetsViewComponent;

impl AssetsViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let ui = content::ui_text(state.session.language);

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::styled(
            ui.assets_title.to_string(),
            styles.style("lesson_title"),
        ));
        lines.push(Line::raw(ui.assets_desc.to_string()));
        lines.push(Line::raw(""));

        for (category, label) in [
            (AssetCategory::Sprites, ui.sprites),
            (AssetCategory::Audio, ui.audio),
        ] {
            lines.push(Line::styled(
                label.to_string(),
                styles.style("sidebar_section"),
            ));
            for file in category.files() {
                lines.push(Line::raw(format!("  {}", category.path(file))));
            }
            lines.push(Line::raw(""));
        }

        let max_scroll = lines.len().saturating_sub(area.height as usize) as u16;
        let scroll = state.session.scroll.min(max_scroll);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
    }
}
