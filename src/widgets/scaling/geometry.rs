//! Radius-driven geometry.
//!
//! A single corner radius decides everything else: radius 0 is the
//! expanded, full-width shape with no margins, and the maximum radius is
//! the collapsed pill at its initial width with the declared margins.

use crate::renderer::Path;
use crate::widgets::{Margins, Rect};

use super::settings::Settings;

/// The current corner radius, already validated against the radius range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadiusState {
    radius: f32,
}

impl RadiusState {
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Width and margins that follow from a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub width: u32,
    pub margins: Margins,
}

/// Rounded rectangle covering the container's full bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPath {
    pub bounds: Rect,
    pub radius: f32,
}

impl ClipPath {
    /// Counter-clockwise path suitable for convex outlines.
    pub fn to_path(&self) -> Path {
        Path::rounded_rect(self.bounds, self.radius)
    }

    /// Whether a point survives the rounded mask
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains_rounded(x, y, self.radius)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            bounds: self.bounds.offset(dx, dy),
            radius: self.radius,
        }
    }
}

/// Pure mapping from a radius to the container's derived geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingGeometry {
    initial_width: u32,
    max_width: u32,
    max_radius: f32,
    max_margins: Margins,
}

impl ScalingGeometry {
    pub fn new(initial_width: u32, max_width: u32, max_radius: f32, max_margins: Margins) -> Self {
        Self {
            initial_width,
            max_width: max_width.max(initial_width),
            max_radius: max_radius.max(0.0),
            max_margins,
        }
    }

    pub fn from_settings(settings: &Settings, max_margins: Margins) -> Self {
        Self::new(
            settings.initial_width(),
            settings.max_width(),
            settings.max_radius(),
            max_margins,
        )
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Validate a requested radius.
    ///
    /// Negative (and NaN) requests are rejected with `None`; anything above
    /// the maximum is clamped down to it.
    pub fn clamp_radius(&self, requested: f32) -> Option<RadiusState> {
        if requested.is_nan() || requested < 0.0 {
            return None;
        }
        Some(RadiusState {
            radius: requested.min(self.max_radius),
        })
    }

    /// Radius for a progress value in `[0, 1]` (1 is fully expanded).
    /// Values outside that range are rejected.
    pub fn radius_for_progress(&self, progress: f32) -> Option<RadiusState> {
        if !(0.0..=1.0).contains(&progress) {
            return None;
        }
        self.clamp_radius(self.max_radius * (1.0 - progress))
    }

    /// Linear interpolation from `max_width` at radius 0 down to
    /// `initial_width` at the maximum radius.
    pub fn width_for_radius(&self, radius: f32) -> u32 {
        let fraction = self.radius_fraction(radius);
        let initial = self.initial_width as f32;
        let max = self.max_width as f32;
        let width = initial + (max - initial) * (1.0 - fraction);
        width.clamp(initial, max) as u32
    }

    /// Margins grow linearly from zero at radius 0 to the declared
    /// margins at the maximum radius.
    pub fn margins_for_radius(&self, radius: f32) -> Margins {
        self.max_margins.scale(self.radius_fraction(radius))
    }

    pub fn clip_path(bounds_width: f32, bounds_height: f32, radius: f32) -> ClipPath {
        ClipPath {
            bounds: Rect::new(0.0, 0.0, bounds_width, bounds_height),
            radius: radius.max(0.0),
        }
    }

    pub fn derive(&self, state: RadiusState) -> DerivedGeometry {
        DerivedGeometry {
            width: self.width_for_radius(state.radius),
            margins: self.margins_for_radius(state.radius),
        }
    }

    /// `radius / max_radius` in `[0, 1]`; zero when there is no radius range.
    fn radius_fraction(&self, radius: f32) -> f32 {
        if self.max_radius <= 0.0 {
            return 0.0;
        }
        (radius / self.max_radius).clamp(0.0, 1.0)
    }
}
