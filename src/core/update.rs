use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Session messages (delegated to SessionState); navigation can
        // change which lesson is on screen, so the mounted widget set is
        // reconciled afterwards.
        Msg::Session(session_msg) => {
            let commands = state.session.update(session_msg);
            let visible = state.visible_viz_kinds();
            state.viz.sync(&visible);
            (state, commands)
        }

        // Visualization messages (delegated to VizState)
        Msg::Viz(viz_msg) => {
            let commands = state.viz.update(viz_msg);
            (state, commands)
        }

        // Time advances every mounted widget timer and the transient
        // status countdown.
        Msg::Tick(dt) => {
            state.viz.tick(dt);
            state.system.tick(dt);
            (state, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::msg::{session::SessionMsg, system::SystemMsg, viz::VizMsg};
    use crate::core::state::system::COPY_ACK_DURATION;
    use crate::domain::course::{LessonId, ViewMode, VizKind};

    #[test]
    fn test_navigation_remounts_widgets() {
        let state = AppState::default();
        let (state, _) = update(Msg::Session(SessionMsg::NextLesson), state);
        assert_eq!(state.session.lesson_id, LessonId::new("l2"));
        assert_eq!(state.viz.mounted_kinds(), vec![VizKind::Scrolling]);
    }

    #[test]
    fn test_leaving_lesson_view_unmounts_everything() {
        let state = AppState::default();
        let (state, _) = update(
            Msg::Session(SessionMsg::SetViewMode(ViewMode::FullSource)),
            state,
        );
        assert!(state.viz.mounted_kinds().is_empty());

        let (state, _) = update(
            Msg::Session(SessionMsg::SetViewMode(ViewMode::Lesson)),
            state,
        );
        assert_eq!(state.viz.mounted_kinds(), vec![VizKind::Gravity]);
    }

    #[test]
    fn test_language_toggle_keeps_widgets_mounted() {
        let state = AppState::default();
        let (state, _) = update(Msg::Session(SessionMsg::ToggleLanguage), state);
        assert_eq!(state.viz.mounted_kinds(), vec![VizKind::Gravity]);
    }

    #[test]
    fn test_tick_drives_viz_and_status() {
        let state = AppState::default();
        let (state, _) = update(Msg::System(SystemMsg::CopyAcknowledged), state);
        let (state, _) = update(Msg::Viz(VizMsg::Primary), state);
        let (state, cmds) = update(Msg::Tick(Duration::from_millis(16)), state);
        assert!(cmds.is_empty());
        assert!(state.viz.gravity.as_ref().is_some_and(|g| g.running));
        assert!(state.system.copy_ack_remaining < Some(COPY_ACK_DURATION));
    }

    #[test]
    fn test_copy_flows_into_clipboard_command() {
        let state = AppState::default();
        let (_, cmds) = update(Msg::Session(SessionMsg::CopySnippet), state);
        assert!(matches!(cmds.as_slice(), [Cmd::CopyToClipboard { .. }]));
    }
}
