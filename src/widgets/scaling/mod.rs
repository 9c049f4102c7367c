//! Container that morphs between a collapsed pill and an expanded panel.
//!
//! The corner radius is the only animated value. Width, margins, the
//! child mask and the shadow outline are all derived from it, so the
//! container never stores geometry that could disagree with the radius.
//!
//! # Example
//! ```
//! use pillbox::prelude::*;
//!
//! let config = ScalingConfig::new().max_width(400.0).max_radius(50.0);
//! let mut card = ScalingContainer::new(config, HostDefaults::new(400.0, 0.0));
//! card.on_size_known(100.0, 100.0);
//!
//! assert!(card.set_progress(0.5));
//! assert_eq!(card.state(), ScalingState::Progressing);
//! assert_eq!(card.geometry().width, 250);
//! ```

mod geometry;
mod outline;
mod settings;
mod state;

pub use geometry::{ClipPath, DerivedGeometry, RadiusState, ScalingGeometry};
pub use outline::{NoopOutline, Outline, OutlineError, OutlineProvider, OutlineSurface};
pub use settings::Settings;
pub use state::{ScalingEvent, ScalingListener, ScalingState, BOUNDARY_EPSILON};

use std::time::Instant;

use crate::animation::{AdvanceResult, Tween};
use crate::config::{HostDefaults, ScalingConfig};
use crate::layout::{Constraints, Size};
use crate::reactive::WidgetId;
use crate::renderer::primitives::Shadow;
use crate::renderer::PaintContext;

use super::widget::{Color, Margins, Rect, Widget};

/// Width and margins to apply to the host's layout params.
/// Margins are whole pixels, like integer layout params.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub width: u32,
    pub margins: Margins,
}

pub struct ScalingContainer {
    widget_id: WidgetId,
    settings: Settings,
    /// Declared margins, reached again whenever the container collapses
    max_margins: Margins,
    radius: RadiusState,
    geometry: DerivedGeometry,
    state: ScalingState,
    /// Full measured bounds, in parent coordinates
    bounds: Rect,
    outline: OutlineProvider,
    outline_surface: Box<dyn OutlineSurface>,
    animator: Tween,
    listener: Option<Box<dyn ScalingListener>>,
    background: Color,
    children: Vec<Box<dyn Widget>>,
}

impl ScalingContainer {
    pub fn new(config: ScalingConfig, host: HostDefaults) -> Self {
        let settings = Settings::new(&config, host);
        let max_margins = config.margins;
        let radius = ScalingGeometry::from_settings(&settings, max_margins)
            .clamp_radius(settings.max_radius())
            .unwrap_or_default();
        Self {
            widget_id: WidgetId::next(),
            geometry: DerivedGeometry {
                width: config.initial_width.unwrap_or(0.0) as u32,
                margins: max_margins,
            },
            settings,
            max_margins,
            radius,
            state: ScalingState::Collapsed,
            bounds: Rect::default(),
            outline: OutlineProvider::default(),
            outline_surface: Box::new(NoopOutline),
            animator: Tween::new(radius.radius(), config.transition),
            listener: None,
            background: Color::TRANSPARENT,
            children: Vec::new(),
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Platform hook that renders elevation shadows
    pub fn outline_surface(mut self, surface: impl OutlineSurface + 'static) -> Self {
        self.outline_surface = Box::new(surface);
        self
    }

    pub fn set_listener(&mut self, listener: impl ScalingListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Called by the host whenever layout settles on a size.
    ///
    /// The first call freezes the [`Settings`] and puts the container in
    /// its collapsed shape.
    pub fn on_size_known(&mut self, width: f32, height: f32) {
        if !self.settings.is_initialized() {
            self.settings
                .initialize(width.max(0.0).round() as u32, height.max(0.0).round() as u32);
            let engine = self.engine();
            if let Some(radius) = engine.clamp_radius(self.settings.max_radius()) {
                self.radius = radius;
                self.geometry = engine.derive(radius);
            }
            self.state = ScalingState::from_radius(self.radius.radius(), engine.max_radius());
            self.outline = OutlineProvider::new(width, height, self.radius.radius());
        }

        self.bounds.width = width;
        self.bounds.height = height;
        self.outline
            .update(self.geometry.width as f32, height, self.radius.radius());
        self.apply_outline();
        self.widget_id.request_paint();
    }

    /// Animate to the expanded shape, restarting from the collapsed radius.
    pub fn expand(&mut self) {
        if !self.ready("expand") {
            return;
        }
        self.animator.start(self.settings.max_radius(), 0.0);
    }

    /// Animate to the collapsed shape, restarting from the expanded radius.
    pub fn collapse(&mut self) {
        if !self.ready("collapse") {
            return;
        }
        self.animator.start(0.0, self.settings.max_radius());
    }

    /// Jump straight to `progress` (0 collapsed, 1 expanded), stopping any
    /// animation in flight. Values outside `[0, 1]` are ignored.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        if !self.ready("set_progress") {
            return false;
        }
        let Some(radius) = self.engine().radius_for_progress(progress) else {
            log::debug!("Ignoring progress {} outside [0, 1]", progress);
            return false;
        };
        self.animator.cancel();
        self.apply_radius(radius);
        true
    }

    /// Per-frame radius from the animation driver.
    pub fn on_tick(&mut self, radius: f32) -> bool {
        log::trace!("Radius tick {}", radius);
        self.set_radius(radius)
    }

    /// The one entry point that changes the radius.
    ///
    /// Negative radii are ignored and larger ones clamp to the maximum.
    /// Returns whether the radius was applied.
    pub fn set_radius(&mut self, radius: f32) -> bool {
        if !self.ready("set_radius") {
            return false;
        }
        match self.engine().clamp_radius(radius) {
            Some(state) => {
                self.apply_radius(state);
                true
            }
            None => {
                log::debug!("Ignoring invalid radius {}", radius);
                false
            }
        }
    }

    /// Re-push the current snapshot to the outline surface.
    pub fn refresh_outline(&mut self) -> Result<bool, OutlineError> {
        self.outline.apply(self.settings.elevation(), self.outline_surface.as_mut())
    }

    pub fn state(&self) -> ScalingState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn radius(&self) -> f32 {
        self.radius.radius()
    }

    /// `radius / max_radius`, the value reported through `on_progress`
    pub fn progress(&self) -> f32 {
        let max_radius = self.settings.max_radius();
        if max_radius <= 0.0 {
            return 0.0;
        }
        self.radius.radius() / max_radius
    }

    pub fn geometry(&self) -> DerivedGeometry {
        self.geometry
    }

    pub fn max_margins(&self) -> Margins {
        self.max_margins
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            width: self.geometry.width,
            margins: self.geometry.margins.trunc(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rounded mask over the full bounds, in local coordinates
    pub fn clip_path(&self) -> ClipPath {
        ScalingGeometry::clip_path(self.bounds.width, self.bounds.height, self.radius.radius())
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    fn engine(&self) -> ScalingGeometry {
        ScalingGeometry::from_settings(&self.settings, self.max_margins)
    }

    fn ready(&self, operation: &str) -> bool {
        if !self.settings.is_initialized() {
            log::debug!("Ignoring {} before the container size is known", operation);
            return false;
        }
        true
    }

    fn apply_radius(&mut self, radius: RadiusState) {
        let engine = self.engine();
        self.radius = radius;
        self.geometry = engine.derive(radius);
        self.state = ScalingState::from_radius(radius.radius(), engine.max_radius());

        if let Some(listener) = self.listener.as_deref_mut() {
            ScalingEvent::for_radius(radius.radius(), engine.max_radius()).dispatch(listener);
        }

        self.outline.update(
            self.geometry.width as f32,
            self.bounds.height,
            radius.radius(),
        );
        self.apply_outline();
        self.widget_id.request_layout();
    }

    fn apply_outline(&mut self) {
        if let Err(err) = self.refresh_outline() {
            log::warn!("Outline update failed: {}", err);
        }
    }
}

impl Widget for ScalingContainer {
    fn advance_animations(&mut self, now: Instant) -> bool {
        if let AdvanceResult::Changed(radius) = self.animator.sample(now) {
            self.on_tick(radius);
        }

        let mut any_animating = self.animator.is_running();
        for child in &mut self.children {
            any_animating |= child.advance_animations(now);
        }
        any_animating
    }

    /// Lays out inside the current margins and reports the outer size,
    /// margins included.
    fn layout(&mut self, constraints: Constraints) -> Size {
        let margins = self.layout_params().margins;
        let inner = constraints.deflate(margins);

        let natural_width = if self.settings.is_initialized() || self.geometry.width > 0 {
            Some(self.geometry.width as f32)
        } else {
            None
        };
        let child_max_width = natural_width.map_or(inner.max_width, |w| w.min(inner.max_width));
        let child_constraints = Constraints::new(0.0, 0.0, child_max_width, inner.max_height);

        let mut content = Size::default();
        for child in &mut self.children {
            let size = child.layout(child_constraints);
            content.width = content.width.max(size.width);
            content.height = content.height.max(size.height);
        }

        let size = inner.constrain(Size::new(
            natural_width.unwrap_or(content.width),
            content.height,
        ));
        if !self.settings.is_initialized()
            || size != Size::new(self.bounds.width, self.bounds.height)
        {
            self.on_size_known(size.width, size.height);
        }

        Size::new(
            size.width + margins.horizontal(),
            size.height + margins.vertical(),
        )
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        let margins = self.layout_params().margins;
        self.bounds.x = x + margins.left;
        self.bounds.y = y + margins.top;
        for child in &mut self.children {
            child.set_origin(self.bounds.x, self.bounds.y);
        }
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let radius = self.radius.radius();

        if self.background.a > 0.0 {
            let shadow = Shadow::from_elevation(self.settings.elevation());
            ctx.draw_rounded_rect(self.bounds, self.background, radius, shadow);
        }

        // Children go into their own layer so the mask only affects them
        ctx.push_layer(self.bounds);
        for child in &self.children {
            child.paint(ctx);
        }
        let mask = self.clip_path().translated(self.bounds.x, self.bounds.y);
        ctx.mask(mask.to_path());
        ctx.pop_layer();
    }
}
