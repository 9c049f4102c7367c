use std::time::Instant;

use super::Transition;

/// Outcome of sampling a [`Tween`] for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult {
    /// Idle, or the value is the same as last frame
    NoChange,
    Changed(f32),
}

/// A single cancellable run between two radii.
///
/// `start` replaces whatever run is in flight. A run's clock starts on
/// the first `sample` after `start`, and its last sample is exactly the
/// target value.
#[derive(Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    running: bool,
    /// Bumped on every start, so hosts can tell runs apart
    generation: u64,
    transition: Transition,
    last_sample: Option<f32>,
}

impl Tween {
    pub fn new(value: f32, transition: Transition) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            running: false,
            generation: 0,
            transition,
            last_sample: None,
        }
    }

    pub fn start(&mut self, from: f32, to: f32) {
        if self.running {
            log::trace!("Tween run {} superseded", self.generation);
        }
        self.from = from;
        self.to = to;
        self.started_at = None;
        self.running = true;
        self.generation += 1;
        self.last_sample = None;
    }

    /// Stop the run in flight; later samples report no change.
    pub fn cancel(&mut self) {
        self.running = false;
        self.started_at = None;
    }

    pub fn sample(&mut self, now: Instant) -> AdvanceResult {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(started_at).as_secs_f32() * 1000.0;

        let value = if elapsed_ms >= self.transition.duration_ms {
            self.running = false;
            self.to
        } else {
            self.from + (self.to - self.from) * self.transition.fraction(elapsed_ms)
        };

        if self.last_sample.replace(value) == Some(value) {
            AdvanceResult::NoChange
        } else {
            AdvanceResult::Changed(value)
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
