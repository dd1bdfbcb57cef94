use std::time::Duration;

use super::stepper::Stepper;

pub const STEP_INTERVAL: Duration = Duration::from_millis(150);
pub const FRAME_COUNT: u8 = 3;

/// Frame-animation demo: cycles an index through the three wing frames
/// while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationViz {
    pub frame: u8,
    pub playing: bool,
    pub stepper: Stepper,
}

impl Default for AnimationViz {
    fn default() -> Self {
        Self {
            frame: 0,
            playing: true,
            stepper: Stepper::new(STEP_INTERVAL),
        }
    }
}

impl AnimationViz {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn step(&mut self) {
        if self.playing {
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for _ in 0..self.stepper.advance(dt) {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_length_is_three() {
        let mut viz = AnimationViz::default();
        let start = viz.frame;
        viz.step();
        viz.step();
        assert_ne!(viz.frame, start);
        viz.step();
        assert_eq!(viz.frame, start);
    }

    #[test]
    fn test_paused_animation_holds_frame() {
        let mut viz = AnimationViz::default();
        viz.step();
        viz.toggle();
        assert!(!viz.playing);
        let frozen = viz.frame;
        viz.step();
        viz.tick(STEP_INTERVAL * 5);
        assert_eq!(viz.frame, frozen);
    }

    #[test]
    fn test_toggle_resumes() {
        let mut viz = AnimationViz::default();
        viz.toggle();
        viz.toggle();
        assert!(viz.playing);
        viz.tick(STEP_INTERVAL);
        assert_eq!(viz.frame, 1);
    }
}
