//! A container that morphs between a compact pill and a full-width panel,
//! driven entirely by its corner radius.

pub mod animation;
pub mod config;
pub mod layout;
pub mod reactive;
pub mod renderer;
pub mod widgets;

use std::time::Instant;

use layout::{Constraints, Size};
use reactive::{take_change_flags, ChangeFlags};
use renderer::PaintContext;
use widgets::Widget;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::config::{HostDefaults, ScalingConfig};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::primitives::Shadow;
    pub use crate::renderer::PaintContext;
    pub use crate::widgets::{
        Color, LayoutParams, Margins, OutlineSurface, Rect, ScalingContainer, ScalingEvent,
        ScalingListener, ScalingState, Widget,
    };
    pub use crate::{FrameReport, Host};
}

/// What a single [`Host::frame`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Some animation still wants another frame
    pub animating: bool,
    pub laid_out: bool,
    pub painted: bool,
}

/// Headless frame loop for a root widget.
///
/// Each frame advances animations, then lays out and repaints only when
/// something requested it. Real hosts replay [`Host::paint_context`] onto
/// their canvas after a painted frame.
pub struct Host<W: Widget> {
    root: W,
    viewport: Size,
    paint_ctx: PaintContext,
}

impl<W: Widget> Host<W> {
    pub fn new(root: W, viewport: Size) -> Self {
        log::info!(
            "Host created with viewport {}x{}",
            viewport.width,
            viewport.height
        );

        let mut host = Self {
            root,
            viewport,
            paint_ctx: PaintContext::new(),
        };
        host.layout();
        host.paint();
        take_change_flags();
        host
    }

    /// Run one frame at time `now`.
    pub fn frame(&mut self, now: Instant) -> FrameReport {
        let mut report = FrameReport {
            animating: self.root.advance_animations(now),
            ..FrameReport::default()
        };

        let mut flags = take_change_flags();
        if flags.contains(ChangeFlags::NEEDS_LAYOUT) {
            self.layout();
            report.laid_out = true;
            // Layout may settle sizes and ask for another paint
            flags |= take_change_flags();
        }
        if flags.contains(ChangeFlags::NEEDS_PAINT) {
            self.paint();
            report.painted = true;
        }

        log::trace!("Frame at {:?}: {:?}", now, report);
        report
    }

    pub fn root(&self) -> &W {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Commands recorded by the last painted frame
    pub fn paint_context(&self) -> &PaintContext {
        &self.paint_ctx
    }

    fn layout(&mut self) {
        let viewport = self.viewport;
        self.root
            .layout(Constraints::new(0.0, 0.0, viewport.width, viewport.height));
        self.root.set_origin(0.0, 0.0);
    }

    fn paint(&mut self) {
        self.paint_ctx.clear();
        self.root.paint(&mut self.paint_ctx);
    }
}
