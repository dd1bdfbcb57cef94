use std::time::Duration;

use super::stepper::Stepper;

pub const GRAVITY: f32 = 0.5;
pub const FLAP_IMPULSE: f32 = -8.0;
pub const ARENA_HEIGHT: f32 = 300.0;
pub const BIRD_RADIUS: f32 = 15.0;
pub const STEP_INTERVAL: Duration = Duration::from_millis(16);

const START_Y: f32 = 50.0;

/// Physics sandbox: a bird that falls under constant gravity and jumps on a
/// fixed upward impulse. Stops on the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityViz {
    pub y: f32,
    pub vy: f32,
    pub running: bool,
    pub stepper: Stepper,
}

impl Default for GravityViz {
    fn default() -> Self {
        Self {
            y: START_Y,
            vy: 0.0,
            running: false,
            stepper: Stepper::new(STEP_INTERVAL),
        }
    }
}

impl GravityViz {
    /// Flap: fixed upward impulse, starts the simulation if idle.
    pub fn flap(&mut self) {
        self.vy = FLAP_IMPULSE;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.y = START_Y;
        self.vy = 0.0;
        self.running = false;
    }

    /// One physics step. On reaching the floor the position is clamped,
    /// velocity zeroed and the simulation stops.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        self.vy += GRAVITY;
        self.y += self.vy;
        let floor = ARENA_HEIGHT - BIRD_RADIUS;
        if self.y >= floor {
            self.y = floor;
            self.vy = 0.0;
            self.running = false;
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for _ in 0..self.stepper.advance(dt) {
            self.step();
        }
    }
}
