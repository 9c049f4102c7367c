use std::time::Instant;

use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

/// Linear RGBA with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// Containment with every corner rounded by `corner_radius`, clamped
    /// to [`Rect::max_corner_radius`].
    pub fn contains_rounded(&self, x: f32, y: f32, corner_radius: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let r = corner_radius.clamp(0.0, self.max_corner_radius());

        // Distance from the point to the inner rect shrunk by r
        let dx = (self.x + r - x).max(x - (self.right() - r)).max(0.0);
        let dy = (self.y + r - y).max(y - (self.bottom() - r)).max(0.0);
        dx * dx + dy * dy <= r * r
    }

    /// Largest radius that keeps the rounded rect convex.
    pub fn max_corner_radius(&self) -> f32 {
        (self.width.min(self.height) / 2.0).max(0.0)
    }
}

/// Outer spacing around a widget, in host layout-param order
/// (left, top, right, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    pub fn scale(self, factor: f32) -> Self {
        self.map(|side| side * factor)
    }

    /// Whole pixels only, like integer layout params.
    pub fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.left), f(self.top), f(self.right), f(self.bottom))
    }
}

impl From<f32> for Margins {
    fn from(value: f32) -> Self {
        Margins::all(value)
    }
}

/// `[horizontal, vertical]`
impl From<[f32; 2]> for Margins {
    fn from([horizontal, vertical]: [f32; 2]) -> Self {
        Margins::new(horizontal, vertical, horizontal, vertical)
    }
}

/// `[left, top, right, bottom]`
impl From<[f32; 4]> for Margins {
    fn from([left, top, right, bottom]: [f32; 4]) -> Self {
        Margins::new(left, top, right, bottom)
    }
}

pub trait Widget {
    /// Step animations to frame time `now`.
    /// Returns true while another frame is needed.
    fn advance_animations(&mut self, now: Instant) -> bool {
        let _ = now;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Position the widget after layout, in parent coordinates.
    fn set_origin(&mut self, x: f32, y: f32);

    fn paint(&self, ctx: &mut PaintContext);
}
