use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{session::SessionMsg, system::SystemMsg, viz::VizMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};
use crate::domain::{content, course::ViewMode};
use crate::presentation::config::keybindings::KeyAction;

/// How far one pointer key press moves the hitbox, in demo pixels.
const POINTER_STEP: f32 = 10.0;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate via configured key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // System status
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Tick and render scheduling is owned by the runner, not the
        // domain layer.
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Hardwired global bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &KeyAction, state: &AppState) -> Vec<Msg> {
    match action {
        KeyAction::Quit => vec![Msg::System(SystemMsg::Quit)],
        KeyAction::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        KeyAction::ScrollUp => vec![Msg::Session(SessionMsg::ScrollUp)],
        KeyAction::ScrollDown => vec![Msg::Session(SessionMsg::ScrollDown)],
        KeyAction::NextLesson => vec![Msg::Session(SessionMsg::NextLesson)],
        KeyAction::PrevLesson => vec![Msg::Session(SessionMsg::PrevLesson)],
        KeyAction::SelectLesson(index) => translate_lesson_index(*index, state),

        KeyAction::ViewLesson => vec![Msg::Session(SessionMsg::SetViewMode(ViewMode::Lesson))],
        KeyAction::ViewFullSource => {
            vec![Msg::Session(SessionMsg::SetViewMode(ViewMode::FullSource))]
        }
        KeyAction::ViewAssets => vec![Msg::Session(SessionMsg::SetViewMode(ViewMode::Assets))],
        KeyAction::ToggleLanguage => vec![Msg::Session(SessionMsg::ToggleLanguage)],
        KeyAction::CopySnippet => vec![Msg::Session(SessionMsg::CopySnippet)],

        KeyAction::Primary => vec![Msg::Viz(VizMsg::Primary)],
        KeyAction::ResetGravity => vec![Msg::Viz(VizMsg::ResetGravity)],
        KeyAction::SpawnPipe => vec![Msg::Viz(VizMsg::SpawnPipe)],
        KeyAction::ToggleAnimation => vec![Msg::Viz(VizMsg::ToggleAnimation)],
        KeyAction::Collide => vec![Msg::Viz(VizMsg::Collide)],
        KeyAction::PointerLeft => pointer_move(-POINTER_STEP, 0.0),
        KeyAction::PointerRight => pointer_move(POINTER_STEP, 0.0),
        KeyAction::PointerUp => pointer_move(0.0, -POINTER_STEP),
        KeyAction::PointerDown => pointer_move(0.0, POINTER_STEP),
    }
}

/// A digit key selects by position in the course order of the active
/// language; digits past the end do nothing.
fn translate_lesson_index(index: usize, state: &AppState) -> Vec<Msg> {
    match content::course(state.session.language).at(index) {
        Some(lesson) => vec![Msg::Session(SessionMsg::SelectLesson(lesson.id.clone()))],
        None => vec![],
    }
}

fn pointer_move(dx: f32, dy: f32) -> Vec<Msg> {
    vec![Msg::Viz(VizMsg::PointerMove { dx, dy })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::LessonId;
    use crate::infrastructure::config::Config;
    use crate::core::state::AppState;

    fn state() -> AppState {
        AppState::with_config(Config::default())
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(quit), &state()),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_configured_navigation_keys() {
        let s = state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key('n')), &s),
            vec![Msg::Session(SessionMsg::NextLesson)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key('t')), &s),
            vec![Msg::Session(SessionMsg::ToggleLanguage)]
        );
    }

    #[test]
    fn test_digit_selects_lesson_by_position() {
        let s = state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key('5')), &s),
            vec![Msg::Session(SessionMsg::SelectLesson(LessonId::new("e1")))]
        );
    }

    #[test]
    fn test_unbound_key_translates_to_nothing() {
        assert!(translate_raw_to_domain(RawMsg::Key(key('Z')), &state()).is_empty());
    }

    #[test]
    fn test_tick_and_render_are_ignored() {
        let s = state();
        assert!(translate_raw_to_domain(RawMsg::Tick, &s).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &s).is_empty());
    }
}
