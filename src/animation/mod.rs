//! Fixed-length radius animations advanced by host frames.

mod timing;
mod tween;

pub use timing::TimingFunction;
pub use tween::{AdvanceResult, Tween};

/// Length of an expand or collapse run.
pub const DEFAULT_DURATION_MS: f32 = 200.0;

/// Duration and easing of one expand or collapse run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: f32,
    pub timing: TimingFunction,
}

impl Transition {
    pub const fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Eased fraction of the run after `elapsed_ms`, saturating at 1.
    pub fn fraction(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.timing
            .evaluate((elapsed_ms / self.duration_ms).clamp(0.0, 1.0))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, TimingFunction::EaseInOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_200ms_ease_in_out() {
        let transition = Transition::default();
        assert_eq!(transition.duration_ms, 200.0);
        assert_eq!(transition.timing, TimingFunction::EaseInOut);
    }

    #[test]
    fn test_fraction_saturates() {
        let linear = Transition::new(100.0, TimingFunction::Linear);
        assert_eq!(linear.fraction(-10.0), 0.0);
        assert_eq!(linear.fraction(50.0), 0.5);
        assert_eq!(linear.fraction(300.0), 1.0);

        let instant = Transition::new(0.0, TimingFunction::Linear);
        assert_eq!(instant.fraction(0.0), 1.0);
    }
}
