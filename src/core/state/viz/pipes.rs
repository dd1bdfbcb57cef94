use std::time::Duration;

use super::stepper::Stepper;

pub const STEP_INTERVAL: Duration = Duration::from_millis(50);
pub const SPAWN_X: f32 = 100.0;
pub const MOVE_DELTA: f32 = 2.0;
pub const REMOVE_BELOW: f32 = -20.0;

/// One entry in the pipe list: a stable id and a horizontal position in
/// percent of the demo screen width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub id: u32,
    pub x: f32,
}

/// Array/list demo: spawned pipes march left each tick and are dropped from
/// the list once they fall below the removal threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct PipesViz {
    pipes: Vec<Pipe>,
    next_id: u32,
    pub stepper: Stepper,
}

impl Default for PipesViz {
    fn default() -> Self {
        Self {
            pipes: Vec::new(),
            next_id: 1,
            stepper: Stepper::new(STEP_INTERVAL),
        }
    }
}

impl PipesViz {
    /// Append a pipe at the spawn position with a fresh, strictly increasing
    /// id.
    pub fn spawn(&mut self) {
        self.pipes.push(Pipe {
            id: self.next_id,
            x: SPAWN_X,
        });
        self.next_id += 1;
    }

    /// Move every pipe left, then drop the ones past the threshold. The
    /// filter preserves spawn order.
    pub fn step(&mut self) {
        for pipe in &mut self.pipes {
            pipe.x -= MOVE_DELTA;
        }
        self.pipes.retain(|p| p.x > REMOVE_BELOW);
    }

    pub fn tick(&mut self, dt: Duration) {
        for _ in 0..self.stepper.advance(dt) {
            self.step();
        }
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_ids_are_strictly_increasing() {
        let mut viz = PipesViz::default();
        viz.spawn();
        viz.step();
        viz.spawn();
        viz.spawn();
        let ids: Vec<u32> = viz.pipes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_step_moves_all_pipes_left() {
        let mut viz = PipesViz::default();
        viz.spawn();
        viz.step();
        viz.spawn();
        viz.step();
        let xs: Vec<f32> = viz.pipes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![SPAWN_X - 2.0 * MOVE_DELTA, SPAWN_X - MOVE_DELTA]);
    }

    #[test]
    fn test_pipes_below_threshold_are_removed() {
        let mut viz = PipesViz::default();
        viz.spawn();
        viz.spawn();
        viz.spawn();
        // 100 - 2n reaches the -20 threshold after 60 steps.
        for _ in 0..60 {
            viz.step();
        }
        assert!(viz.pipes().is_empty());
    }

    #[test]
    fn test_removal_preserves_order_of_survivors() {
        let mut viz = PipesViz::default();
        viz.spawn(); // id 1
        for _ in 0..30 {
            viz.step();
        }
        viz.spawn(); // id 2
        viz.spawn(); // id 3
        // id 1 is at 40 - 2*31 < -20 after 31 more steps; 2 and 3 survive.
        for _ in 0..31 {
            viz.step();
        }
        let ids: Vec<u32> = viz.pipes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
