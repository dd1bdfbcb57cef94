use std::time::Duration;

/// Fixed-interval stepper owned by one mounted widget.
///
/// Created on mount, cancelled exactly once on teardown. A cancelled stepper
/// never fires again; a second `cancel` reports the double teardown instead
/// of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stepper {
    interval: Duration,
    accumulated: Duration,
    cancelled: bool,
}

impl Stepper {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            cancelled: false,
        }
    }

    /// Advance by `dt` and return how many whole intervals elapsed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled || self.interval.is_zero() {
            return 0;
        }
        self.accumulated += dt;
        let fired = (self.accumulated.as_micros() / self.interval.as_micros()) as u32;
        self.accumulated -= self.interval * fired;
        fired
    }

    /// Halt the stepper. Returns false if it was already cancelled, which
    /// indicates a double teardown.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_whole_intervals() {
        let mut stepper = Stepper::new(Duration::from_millis(50));
        assert_eq!(stepper.advance(Duration::from_millis(49)), 0);
        assert_eq!(stepper.advance(Duration::from_millis(1)), 1);
        assert_eq!(stepper.advance(Duration::from_millis(125)), 2);
        // 25ms remainder carried over.
        assert_eq!(stepper.advance(Duration::from_millis(25)), 1);
    }

    #[test]
    fn test_cancel_halts_and_is_reported_once() {
        let mut stepper = Stepper::new(Duration::from_millis(16));
        assert!(stepper.cancel());
        assert!(!stepper.cancel());
        assert!(stepper.is_cancelled());
        assert_eq!(stepper.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut stepper = Stepper::new(Duration::ZERO);
        assert_eq!(stepper.advance(Duration::from_secs(1)), 0);
    }
}
