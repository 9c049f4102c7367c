use crate::widgets::{Color, Rect};

/// Drop shadow cast below a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Offset in logical pixels (x, y)
    pub offset: (f32, f32),
    pub blur: f32,
    pub color: Color,
}

/// `(offset_y, blur, alpha)` for the first few whole elevation levels
const ELEVATION_STEPS: [(f32, f32, f32); 5] = [
    (1.0, 3.0, 0.12),
    (2.0, 4.0, 0.16),
    (3.0, 6.0, 0.19),
    (4.0, 8.0, 0.20),
    (6.0, 10.0, 0.22),
];

impl Shadow {
    pub const fn none() -> Self {
        Self {
            offset: (0.0, 0.0),
            blur: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Shadow for an elevation in logical pixels. Zero, negative and NaN
    /// elevations cast none.
    pub fn from_elevation(elevation: f32) -> Self {
        if elevation.is_nan() || elevation <= 0.0 {
            return Self::none();
        }

        let level = (elevation as usize).max(1);
        let (offset_y, blur, alpha) = match ELEVATION_STEPS.get(level - 1) {
            Some(&step) => step,
            None => (
                (elevation * 1.2).min(12.0),
                (elevation * 2.0).min(24.0),
                (0.12 + elevation * 0.02).min(0.25),
            ),
        };

        Self {
            offset: (0.0, offset_y),
            blur,
            color: Color::rgba(0.0, 0.0, 0.0, alpha),
        }
    }
}

/// Filled rounded rectangle, optionally with a shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub color: Color,
    pub radius: f32,
    pub shadow: Shadow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_shadow_without_elevation() {
        assert_eq!(Shadow::from_elevation(0.0), Shadow::none());
        assert_eq!(Shadow::from_elevation(-3.0), Shadow::none());
        assert_eq!(Shadow::from_elevation(f32::NAN), Shadow::none());
    }

    #[test]
    fn test_shadow_grows_with_elevation() {
        let low = Shadow::from_elevation(1.0);
        let high = Shadow::from_elevation(4.0);
        assert!(low.color.a > 0.0);
        assert!(high.blur > low.blur);
        assert!(high.offset.1 > low.offset.1);
        assert_eq!(Shadow::from_elevation(0.5), low);
    }

    #[test]
    fn test_large_elevation_is_capped() {
        let shadow = Shadow::from_elevation(100.0);
        assert_eq!(shadow.offset, (0.0, 12.0));
        assert_eq!(shadow.blur, 24.0);
        assert_eq!(shadow.color.a, 0.25);
    }
}
