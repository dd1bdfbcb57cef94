use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pyflap::core::msg::Msg;
use pyflap::core::raw_msg::RawMsg;
use pyflap::core::state::viz::game_states::GamePhase;
use pyflap::core::state::AppState;
use pyflap::infrastructure::config::Config;
use pyflap::integration::runtime::Runtime;

fn key(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn space() -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))
}

fn create_runtime() -> Runtime {
    Runtime::new(AppState::with_config(Config::default()))
}

#[test]
fn test_gravity_demo_falls_and_lands() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(space());
    runtime.process_all_messages();
    assert!(runtime
        .state()
        .viz
        .gravity
        .as_ref()
        .is_some_and(|g| g.running));

    // A few seconds of ticks are plenty to hit the floor.
    for _ in 0..300 {
        runtime.send_msg(Msg::Tick(Duration::from_millis(16)));
    }
    runtime.process_all_messages();
    let gravity = runtime.state().viz.gravity.as_ref().expect("mounted");
    assert!(!gravity.running);
    assert_eq!(gravity.y, 285.0);

    runtime.send_raw_msg(key('r'));
    runtime.process_all_messages();
    let gravity = runtime.state().viz.gravity.as_ref().expect("mounted");
    assert_eq!(gravity.y, 50.0);
}

#[test]
fn test_pipes_demo_spawns_marches_and_culls() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(key('3'));
    runtime.send_raw_msg(key('s'));
    runtime.send_raw_msg(key('s'));
    runtime.process_all_messages();
    assert_eq!(
        runtime.state().viz.pipes.as_ref().map(|p| p.pipes().len()),
        Some(2)
    );

    // 60 steps at 50ms each pushes both pipes past the removal line.
    runtime.send_msg(Msg::Tick(Duration::from_millis(3_000)));
    runtime.process_all_messages();
    assert_eq!(
        runtime.state().viz.pipes.as_ref().map(|p| p.pipes().len()),
        Some(0)
    );
}

#[test]
fn test_collision_demo_reacts_to_pointer() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(key('4'));
    runtime.process_all_messages();
    assert!(runtime
        .state()
        .viz
        .collision
        .as_ref()
        .is_some_and(|c| !c.colliding));

    // 12 steps right from x=50 lands the square inside the obstacle.
    for _ in 0..12 {
        runtime.send_raw_msg(key('l'));
    }
    runtime.send_raw_msg(key('d'));
    runtime.send_raw_msg(key('d'));
    runtime.process_all_messages();
    assert!(runtime
        .state()
        .viz
        .collision
        .as_ref()
        .is_some_and(|c| c.colliding));
}

#[test]
fn test_animation_demo_advances_and_pauses() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(key('5'));
    runtime.process_all_messages();
    runtime.send_msg(Msg::Tick(Duration::from_millis(150)));
    runtime.process_all_messages();
    assert_eq!(
        runtime.state().viz.animation.as_ref().map(|a| a.frame),
        Some(1)
    );

    runtime.send_raw_msg(key('m'));
    runtime.send_msg(Msg::Tick(Duration::from_millis(600)));
    runtime.process_all_messages();
    assert_eq!(
        runtime.state().viz.animation.as_ref().map(|a| a.frame),
        Some(1)
    );
}

#[test]
fn test_game_states_demo_full_cycle() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(key('6'));
    runtime.process_all_messages();
    let phase = |r: &Runtime| r.state().viz.game_states.as_ref().map(|s| s.phase);
    assert_eq!(phase(&runtime), Some(GamePhase::Menu));

    runtime.send_raw_msg(space());
    runtime.process_all_messages();
    assert_eq!(phase(&runtime), Some(GamePhase::Playing));

    runtime.send_raw_msg(key('x'));
    runtime.process_all_messages();
    assert_eq!(phase(&runtime), Some(GamePhase::GameOver));

    runtime.send_raw_msg(space());
    runtime.process_all_messages();
    assert_eq!(phase(&runtime), Some(GamePhase::Menu));
}

#[test]
fn test_remount_resets_demo_state() {
    let mut runtime = create_runtime();
    runtime.send_raw_msg(space());
    runtime.process_all_messages();
    runtime.send_msg(Msg::Tick(Duration::from_millis(160)));
    runtime.process_all_messages();
    assert!(runtime
        .state()
        .viz
        .gravity
        .as_ref()
        .is_some_and(|g| g.y != 50.0));

    // Leave the lesson and come back; the demo starts over.
    runtime.send_raw_msg(key('f'));
    runtime.send_raw_msg(key('e'));
    runtime.process_all_messages();
    let gravity = runtime.state().viz.gravity.as_ref().expect("remounted");
    assert_eq!(gravity.y, 50.0);
    assert!(!gravity.running);
}

#[test]
fn test_controls_for_unmounted_demos_are_ignored() {
    let mut runtime = create_runtime();
    // Gravity lesson is open; pipe and animation controls do nothing.
    runtime.send_raw_msg(key('s'));
    runtime.send_raw_msg(key('m'));
    runtime.send_raw_msg(key('x'));
    runtime.process_all_messages();
    let viz = &runtime.state().viz;
    assert!(viz.pipes.is_none());
    assert!(viz.animation.is_none());
    assert!(viz.game_states.is_none());
    assert!(viz.gravity.is_some());
}
