//! Declared configuration for a scaling container.
//!
//! Every length is optional; unset values fall back to what the host
//! provides when the container first learns its size.

use crate::animation::Transition;
use crate::widgets::Margins;

/// Attributes declared for a scaling container, read once at construction.
///
/// # Example
/// ```
/// use pillbox::config::ScalingConfig;
///
/// let config = ScalingConfig::new()
///     .max_width(400.0)
///     .max_radius(28.0)
///     .margins([16.0, 8.0, 16.0, 8.0]);
/// assert_eq!(config.max_radius, Some(28.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScalingConfig {
    /// Collapsed width; defaults to the first measured width
    pub initial_width: Option<f32>,
    /// Expanded width; defaults to the host screen width
    pub max_width: Option<f32>,
    /// Corner radius in the collapsed state; defaults to half the measured height
    pub max_radius: Option<f32>,
    /// Elevation; defaults to the elevation inherited from the host
    pub elevation: Option<f32>,
    /// Layout-declared margins, reached in the collapsed state
    pub margins: Margins,
    /// Timing of `expand`/`collapse`
    pub transition: Transition,
}

impl ScalingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_width(mut self, width: f32) -> Self {
        self.initial_width = declared_length(width);
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = declared_length(width);
        self
    }

    pub fn max_radius(mut self, radius: f32) -> Self {
        self.max_radius = declared_length(radius);
        self
    }

    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = declared_length(elevation);
        self
    }

    pub fn margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = margins.into();
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }
}

/// Values the host supplies for attributes that were not declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostDefaults {
    /// Width of the parent or screen, the default expanded width
    pub screen_width: f32,
    /// Elevation the container already has in the host
    pub elevation: f32,
}

impl HostDefaults {
    pub fn new(screen_width: f32, elevation: f32) -> Self {
        Self {
            screen_width,
            elevation,
        }
    }
}

/// Lengths must be finite and non-negative; anything else counts as unset.
fn declared_length(value: f32) -> Option<f32> {
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        log::debug!("Ignoring invalid declared length {}", value);
        None
    }
}
