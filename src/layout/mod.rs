//! Sizes and the constraints a host hands down during layout.

use crate::widgets::Margins;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Inclusive bounds on the size a widget may report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn new(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width.max(self.min_width)),
            size.height.clamp(self.min_height, self.max_height.max(self.min_height)),
        )
    }

    /// Space left inside `margins`. No bound goes below zero.
    pub fn deflate(&self, margins: Margins) -> Self {
        let shrink = |value: f32, by: f32| (value - by).max(0.0);
        Self::new(
            shrink(self.min_width, margins.horizontal()),
            shrink(self.min_height, margins.vertical()),
            shrink(self.max_width, margins.horizontal()),
            shrink(self.max_height, margins.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain() {
        let c = Constraints::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(c.constrain(Size::new(50.0, 50.0)), Size::new(50.0, 50.0));
        assert_eq!(c.constrain(Size::new(5.0, 15.0)), Size::new(10.0, 20.0));
        assert_eq!(c.constrain(Size::new(150.0, 250.0)), Size::new(100.0, 200.0));
    }

    #[test]
    fn test_deflate() {
        let c = Constraints::new(400.0, 0.0, 400.0, 100.0);
        let inner = c.deflate(Margins::new(10.0, 20.0, 10.0, 20.0));
        assert_eq!(inner, Constraints::new(380.0, 0.0, 380.0, 60.0));

        let tiny = Constraints::new(0.0, 0.0, 10.0, 10.0).deflate(Margins::all(20.0));
        assert_eq!(tiny, Constraints::new(0.0, 0.0, 0.0, 0.0));
    }
}
