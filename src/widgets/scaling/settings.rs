//! One-time size limits of a scaling container.

use crate::config::{HostDefaults, ScalingConfig};

/// Size limits of a scaling container, frozen once its size is known.
///
/// Until [`Settings::initialize`] runs, accessors report the declared or
/// host-provided values; the initial width reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    declared_initial_width: Option<f32>,
    declared_max_radius: Option<f32>,
    initial_width: u32,
    max_width: u32,
    max_radius: f32,
    elevation: f32,
    initialized: bool,
}

impl Settings {
    pub fn new(config: &ScalingConfig, host: HostDefaults) -> Self {
        let max_width = config.max_width.unwrap_or(host.screen_width).max(0.0) as u32;
        let elevation = config.elevation.unwrap_or(host.elevation).max(0.0);
        Self {
            declared_initial_width: config.initial_width,
            declared_max_radius: config.max_radius,
            initial_width: 0,
            max_width,
            max_radius: config.max_radius.unwrap_or(0.0),
            elevation,
            initialized: false,
        }
    }

    /// Resolve the limits from the first measured size.
    ///
    /// Only the first call has an effect; it returns `false` afterwards.
    pub fn initialize(&mut self, measured_width: u32, measured_height: u32) -> bool {
        if self.initialized {
            return false;
        }

        self.initial_width = self
            .declared_initial_width
            .map(|width| width as u32)
            .unwrap_or(measured_width);
        if self.initial_width > self.max_width {
            log::warn!(
                "Initial width {} exceeds max width {}, raising max width",
                self.initial_width,
                self.max_width
            );
            self.max_width = self.initial_width;
        }
        self.max_radius = self
            .declared_max_radius
            .unwrap_or(measured_height as f32 / 2.0);
        self.initialized = true;

        log::info!(
            "Scaling settings: width {}..{}, max radius {}, elevation {}",
            self.initial_width,
            self.max_width,
            self.max_radius,
            self.elevation
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn initial_width(&self) -> u32 {
        self.initial_width
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }
}
