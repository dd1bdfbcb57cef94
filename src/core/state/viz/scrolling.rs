use std::time::Duration;

use super::stepper::Stepper;

pub const STEP_INTERVAL: Duration = Duration::from_millis(16);
pub const SCROLL_DELTA: u16 = 2;
pub const WRAP: u16 = 100;

/// Infinite-scroll demo: a free-running horizontal offset in percent of one
/// ground segment, wrapping at 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollingViz {
    pub offset: u16,
    pub stepper: Stepper,
}

impl Default for ScrollingViz {
    fn default() -> Self {
        Self {
            offset: 0,
            stepper: Stepper::new(STEP_INTERVAL),
        }
    }
}

impl ScrollingViz {
    pub fn step(&mut self) {
        self.offset = (self.offset + SCROLL_DELTA) % WRAP;
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
    fn test_offset_advances_and_wraps() {
        let mut viz = ScrollingViz::default();
        for _ in 0..49 {
            viz.step();
        }
        assert_eq!(viz.offset, 98);
        viz.step();
        assert_eq!(viz.offset, 0);
    }

    #[test]
    fn test_offset_stays_in_range() {
        let mut viz = ScrollingViz::default();
        for _ in 0..1000 {
            viz.step();
            assert!(viz.offset < WRAP);
        }
    }
}
