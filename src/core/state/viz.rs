use std::time::Duration;

pub mod animation;
pub mod collision;
pub mod game_states;
pub mod gravity;
pub mod pipes;
pub mod scrolling;
pub mod stepper;

use animation::AnimationViz;
use collision::CollisionViz;
use game_states::GameStatesViz;
use gravity::GravityViz;
use pipes::PipesViz;
use scrolling::ScrollingViz;

use crate::core::{cmd::Cmd, msg::viz::VizMsg};
use crate::domain::course::VizKind;

/// The set of currently mounted visualization widgets.
///
/// A widget exists exactly while its lesson step is on screen: `sync`
/// mounts fresh instances and tears down the rest, cancelling each timer
/// exactly once. Messages for unmounted widgets are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VizState {
    pub gravity: Option<GravityViz>,
    pub scrolling: Option<ScrollingViz>,
    pub pipes: Option<PipesViz>,
    pub collision: Option<CollisionViz>,
    pub animation: Option<AnimationViz>,
    pub game_states: Option<GameStatesViz>,
}

impl VizState {
    /// Reconcile the mounted set against the kinds that should be visible.
    /// Mounting always starts from the widget's initial state.
    pub fn sync(&mut self, visible: &[VizKind]) {
        self.sync_one(VizKind::Gravity, visible, |s| &mut s.gravity);
        self.sync_one(VizKind::Scrolling, visible, |s| &mut s.scrolling);
        self.sync_one(VizKind::Pipes, visible, |s| &mut s.pipes);
        self.sync_one(VizKind::Collision, visible, |s| &mut s.collision);
        self.sync_one(VizKind::Animation, visible, |s| &mut s.animation);
        self.sync_one(VizKind::States, visible, |s| &mut s.game_states);
    }

    fn sync_one<W: Default + Teardown>(
        &mut self,
        kind: VizKind,
        visible: &[VizKind],
        slot: impl Fn(&mut Self) -> &mut Option<W>,
    ) {
        let should_mount = visible.contains(&kind);
        let slot = slot(self);
        match (should_mount, slot.is_some()) {
            (true, false) => *slot = Some(W::default()),
            (false, true) => {
                if let Some(mut widget) = slot.take() {
                    widget.teardown();
                }
            }
            _ => {}
        }
    }

    pub fn mounted_kinds(&self) -> Vec<VizKind> {
        let mut kinds = Vec::new();
        if self.gravity.is_some() {
            kinds.push(VizKind::Gravity);
        }
        if self.scrolling.is_some() {
            kinds.push(VizKind::Scrolling);
        }
        if self.pipes.is_some() {
            kinds.push(VizKind::Pipes);
        }
        if self.collision.is_some() {
            kinds.push(VizKind::Collision);
        }
        if self.animation.is_some() {
            kinds.push(VizKind::Animation);
        }
        if self.game_states.is_some() {
            kinds.push(VizKind::States);
        }
        kinds
    }

    /// Drive every mounted widget timer by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(gravity) = &mut self.gravity {
            gravity.tick(dt);
        }
        if let Some(scrolling) = &mut self.scrolling {
            scrolling.tick(dt);
        }
        if let Some(pipes) = &mut self.pipes {
            pipes.tick(dt);
        }
        if let Some(animation) = &mut self.animation {
            animation.tick(dt);
        }
    }

    /// Viz-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: VizMsg) -> Vec<Cmd> {
        match msg {
            // The primary action goes to every mounted widget that has one.
            VizMsg::Primary => {
                if let Some(gravity) = &mut self.gravity {
                    gravity.flap();
                }
                if let Some(states) = &mut self.game_states {
                    states.primary();
                }
                vec![]
            }

            VizMsg::ResetGravity => {
                if let Some(gravity) = &mut self.gravity {
                    gravity.reset();
                }
                vec![]
            }

            VizMsg::SpawnPipe => {
                if let Some(pipes) = &mut self.pipes {
                    pipes.spawn();
                }
                vec![]
            }

            VizMsg::ToggleAnimation => {
                if let Some(animation) = &mut self.animation {
                    animation.toggle();
                }
                vec![]
            }

            VizMsg::Collide => {
                if let Some(states) = &mut self.game_states {
                    states.collide();
                }
                vec![]
            }

            VizMsg::PointerMove { dx, dy } => {
                if let Some(collision) = &mut self.collision {
                    collision.pointer_move(dx, dy);
                }
                vec![]
            }
        }
    }
}

/// Teardown hook run when a widget is unmounted. Widgets with a timer
/// cancel it here; the cancel must succeed, a failure means the widget
/// was torn down twice.
trait Teardown {
    fn teardown(&mut self);
}

impl Teardown for GravityViz {
    fn teardown(&mut self) {
        let cancelled = self.stepper.cancel();
        debug_assert!(cancelled);
    }
}

impl Teardown for ScrollingViz {
    fn teardown(&mut self) {
        let cancelled = self.stepper.cancel();
        debug_assert!(cancelled);
    }
}

impl Teardown for PipesViz {
    fn teardown(&mut self) {
        let cancelled = self.stepper.cancel();
        debug_assert!(cancelled);
    }
}

impl Teardown for AnimationViz {
    fn teardown(&mut self) {
        let cancelled = self.stepper.cancel();
        debug_assert!(cancelled);
    }
}

impl Teardown for CollisionViz {
    fn teardown(&mut self) {}
}

impl Teardown for GameStatesViz {
    fn teardown(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_mounts_and_tears_down() {
        let mut viz = VizState::default();
        viz.sync(&[VizKind::Gravity]);
        assert_eq!(viz.mounted_kinds(), vec![VizKind::Gravity]);

        viz.sync(&[VizKind::Scrolling]);
        assert_eq!(viz.mounted_kinds(), vec![VizKind::Scrolling]);
        assert!(viz.gravity.is_none());
    }

    #[test]
    fn test_sync_is_idempotent_and_keeps_widget_state() {
        let mut viz = VizState::default();
        viz.sync(&[VizKind::Pipes]);
        viz.update(VizMsg::SpawnPipe);
        viz.sync(&[VizKind::Pipes]);
        let pipes = viz.pipes.as_ref().expect("pipes stay mounted");
        assert_eq!(pipes.pipes().len(), 1);
    }

    #[test]
    fn test_remount_starts_fresh() {
        let mut viz = VizState::default();
        viz.sync(&[VizKind::Animation]);
        viz.tick(animation::STEP_INTERVAL);
        assert_eq!(viz.animation.as_ref().map(|a| a.frame), Some(1));

        viz.sync(&[]);
        viz.sync(&[VizKind::Animation]);
        assert_eq!(viz.animation.as_ref().map(|a| a.frame), Some(0));
    }

    #[test]
    fn test_messages_for_unmounted_widgets_are_dropped() {
        let mut viz = VizState::default();
        assert!(viz.update(VizMsg::SpawnPipe).is_empty());
        assert!(viz.update(VizMsg::Primary).is_empty());
        assert_eq!(viz, VizState::default());
    }

    #[test]
    fn test_tick_only_drives_mounted_widgets() {
        let mut viz = VizState::default();
        viz.sync(&[VizKind::Gravity, VizKind::Scrolling]);
        viz.update(VizMsg::Primary);
        viz.tick(Duration::from_millis(16));
        assert_eq!(viz.scrolling.as_ref().map(|s| s.offset), Some(2));
        // The flap impulse dominates early, so the bird moved up.
        assert!(viz.gravity.as_ref().is_some_and(|g| g.y < 50.0));
    }

    #[test]
    fn test_teardown_spends_the_stepper_cancel() {
        let mut widget = GravityViz::default();
        widget.teardown();
        // The cancel happened inside teardown, not in an assertion.
        assert!(!widget.stepper.cancel());
    }

    #[test]
    fn test_primary_reaches_all_mounted_targets() {
        let mut viz = VizState::default();
        viz.sync(&[VizKind::Gravity, VizKind::States]);
        viz.update(VizMsg::Primary);
        assert!(viz.gravity.as_ref().is_some_and(|g| g.running));
        assert_eq!(
            viz.game_states.as_ref().map(|s| s.phase),
            Some(game_states::GamePhase::Playing)
        );
    }
}
