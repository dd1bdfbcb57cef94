use std::time::Duration;

pub mod session;
pub mod system;
pub mod viz;

use session::SessionState;
use system::SystemState;
use viz::VizState;

use crate::domain::course::ViewMode;
use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub viz: VizState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl ConfigState {
    /// The wall-clock interval between two ticks of the main loop.
    pub fn tick_interval(&self) -> Duration {
        let rate = self.config.tick_rate;
        if rate > 0.0 {
            Duration::from_secs_f64(1.0 / rate)
        } else {
            Duration::from_millis(16)
        }
    }
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn with_config(config: Config) -> Self {
        let session = SessionState::with_language(config.language);
        let mut state = Self {
            session,
            config: ConfigState { config },
            ..Default::default()
        };
        state.viz.sync(&state.visible_viz_kinds());
        state
    }

    /// Visualization kinds that should be mounted right now: the ones
    /// embedded by the open lesson, and none in the other views.
    pub fn visible_viz_kinds(&self) -> Vec<crate::domain::course::VizKind> {
        match self.session.view_mode {
            ViewMode::Lesson => self.session.current_lesson().viz_kinds(),
            ViewMode::FullSource | ViewMode::Assets => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::VizKind;

    #[test]
    fn test_initial_state_mounts_first_lesson_widgets() {
        let state = AppState::with_config(Config::default());
        assert_eq!(state.viz.mounted_kinds(), vec![VizKind::Gravity]);
    }

    #[test]
    fn test_tick_interval_from_rate() {
        let state = AppState::default();
        // Default tick rate is 60 ticks per second.
        assert_eq!(
            state.config.tick_interval(),
            Duration::from_secs_f64(1.0 / 60.0)
        );
    }

    #[test]
    fn test_non_lesson_views_mount_nothing() {
        let mut state = AppState::with_config(Config::default());
        state.session.view_mode = ViewMode::Assets;
        assert!(state.visible_viz_kinds().is_empty());
    }
}
