//! Shadow outlines for elevated containers.
//!
//! Shadows need a convex outline separate from the child mask, so the
//! container keeps its own `{width, height, radius}` snapshot here and
//! pushes it to an [`OutlineSurface`] whenever the geometry changes.
//! Callers log and drop [`OutlineError`]s; a failed shadow update never
//! stops layout or drawing.

use thiserror::Error;

use crate::renderer::primitives::Shadow;
use crate::renderer::Path;
use crate::widgets::Rect;

use super::geometry::ScalingGeometry;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    #[error("invalid outline geometry: {width}x{height} with radius {radius}")]
    InvalidGeometry { width: f32, height: f32, radius: f32 },
    #[error("platform rejected outline: {0}")]
    Platform(String),
}

/// Convex shape and shadow handed to the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub bounds: Rect,
    pub radius: f32,
    pub path: Path,
    pub shadow: Shadow,
}

/// What the host platform can do with outlines.
pub trait OutlineSurface {
    fn supports_elevation(&self) -> bool;
    fn apply_outline(&mut self, outline: &Outline) -> Result<(), OutlineError>;
}

/// Surface for hosts without elevation support, such as headless tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOutline;

impl OutlineSurface for NoopOutline {
    fn supports_elevation(&self) -> bool {
        false
    }

    fn apply_outline(&mut self, _outline: &Outline) -> Result<(), OutlineError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutlineProvider {
    width: f32,
    height: f32,
    radius: f32,
}

impl OutlineProvider {
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    /// Replace the snapshot the next outline is built from.
    pub fn update(&mut self, width: f32, height: f32, radius: f32) {
        self.width = width;
        self.height = height;
        self.radius = radius;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Build the outline matching the rounded clip path for the snapshot.
    pub fn outline(&self, elevation: f32) -> Result<Outline, OutlineError> {
        let valid = [self.width, self.height, self.radius]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !valid {
            return Err(OutlineError::InvalidGeometry {
                width: self.width,
                height: self.height,
                radius: self.radius,
            });
        }

        let clip = ScalingGeometry::clip_path(self.width, self.height, self.radius);
        let radius = clip.radius.min(clip.bounds.max_corner_radius());
        Ok(Outline {
            bounds: clip.bounds,
            radius,
            path: clip.to_path(),
            shadow: Shadow::from_elevation(elevation),
        })
    }

    /// Push the outline to `surface`.
    ///
    /// Returns `Ok(false)` without touching the surface when there is no
    /// elevation or the surface cannot render shadows.
    pub fn apply(
        &self,
        elevation: f32,
        surface: &mut dyn OutlineSurface,
    ) -> Result<bool, OutlineError> {
        if elevation <= 0.0 || !surface.supports_elevation() {
            return Ok(false);
        }
        let outline = self.outline(elevation)?;
        surface.apply_outline(&outline)?;
        Ok(true)
    }
}
