//! Recorded paint commands.
//!
//! Widgets paint into a [`PaintContext`], which only records what to draw.
//! The host canvas replays the recorded [`DrawOp`]s in order.

pub mod path;
pub mod primitives;

pub use path::{Direction, Path, PathCommand};

use primitives::{RoundedRect, Shadow};

use crate::widgets::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Shape(RoundedRect),
    /// Start an offscreen layer; later ops draw into it until the matching pop
    PushLayer { bounds: Rect },
    /// Keep only the pixels of the current layer inside `path`
    Mask { path: Path },
    /// Composite the innermost layer back onto its parent
    PopLayer,
}

#[derive(Debug, Default)]
pub struct PaintContext {
    ops: Vec<DrawOp>,
    layer_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded ops, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.layer_depth = 0;
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rounded_rect(rect, color, 0.0, Shadow::none());
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32, shadow: Shadow) {
        self.ops.push(DrawOp::Shape(RoundedRect {
            rect,
            color,
            radius,
            shadow,
        }));
    }

    pub fn push_layer(&mut self, bounds: Rect) {
        self.layer_depth += 1;
        self.ops.push(DrawOp::PushLayer { bounds });
    }

    /// Mask the current layer with `path`. Ignored outside a layer.
    pub fn mask(&mut self, path: Path) {
        if self.layer_depth == 0 {
            log::warn!("mask called outside a layer");
            return;
        }
        self.ops.push(DrawOp::Mask { path });
    }

    pub fn pop_layer(&mut self) {
        if self.layer_depth == 0 {
            log::warn!("pop_layer called without a matching push_layer");
            return;
        }
        self.layer_depth -= 1;
        self.ops.push(DrawOp::PopLayer);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}
