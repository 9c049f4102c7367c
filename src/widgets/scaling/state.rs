//! Collapsed / expanded / in-between classification and the listener
//! that hears about every accepted radius update.

/// Radii within this distance of a bound count as being on it.
pub const BOUNDARY_EPSILON: f32 = 1e-3;

/// Lifecycle of a scaling container, derived from its radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingState {
    /// Radius at its maximum: pill shape, initial width, full margins
    #[default]
    Collapsed,
    /// Radius zero: full width, no margins
    Expanded,
    /// Anywhere in between
    Progressing,
}

impl ScalingState {
    /// Classify a radius. A zero range counts as expanded.
    pub fn from_radius(radius: f32, max_radius: f32) -> Self {
        if radius.abs() <= BOUNDARY_EPSILON {
            ScalingState::Expanded
        } else if (radius - max_radius).abs() <= BOUNDARY_EPSILON {
            ScalingState::Collapsed
        } else {
            ScalingState::Progressing
        }
    }
}

/// The single notification sent for one radius update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalingEvent {
    Collapsed,
    Expanded,
    /// `radius / max_radius`: 0 when expanded, 1 when collapsed
    Progress(f32),
}

impl ScalingEvent {
    pub fn for_radius(radius: f32, max_radius: f32) -> Self {
        match ScalingState::from_radius(radius, max_radius) {
            ScalingState::Collapsed => ScalingEvent::Collapsed,
            ScalingState::Expanded => ScalingEvent::Expanded,
            ScalingState::Progressing => ScalingEvent::Progress(radius / max_radius),
        }
    }

    /// Invoke the matching listener callback
    pub fn dispatch(self, listener: &mut dyn ScalingListener) {
        match self {
            ScalingEvent::Collapsed => listener.on_collapsed(),
            ScalingEvent::Expanded => listener.on_expanded(),
            ScalingEvent::Progress(progress) => listener.on_progress(progress),
        }
    }
}

/// Observer of a scaling container. Exactly one method runs per accepted
/// radius update.
pub trait ScalingListener {
    fn on_collapsed(&mut self) {}
    fn on_expanded(&mut self) {}
    fn on_progress(&mut self, progress: f32) {
        let _ = progress;
    }
}
