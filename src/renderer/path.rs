//! Vector paths handed to the host canvas and outline APIs.

use crate::widgets::Rect;

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Visual winding of a closed path in y-down screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    CubicTo {
        c1: (f32, f32),
        c2: (f32, f32),
        x: f32,
        y: f32,
    },
    Close,
}

impl PathCommand {
    fn end_point(&self) -> Option<(f32, f32)> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::CubicTo { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rectangle with all four corners rounded by `radius`,
    /// wound counter-clockwise starting at the end of the top edge.
    ///
    /// The radius is clamped to half of the smaller side so the result
    /// is always convex.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let r = radius.max(0.0).min(rect.max_corner_radius());
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
        let k = r * KAPPA;

        let mut path = Path::new();
        path.move_to(right - r, top);
        path.line_to(left + r, top);
        if r > 0.0 {
            path.cubic_to((left + r - k, top), (left, top + r - k), left, top + r);
        }
        path.line_to(left, bottom - r);
        if r > 0.0 {
            path.cubic_to((left, bottom - r + k), (left + r - k, bottom), left + r, bottom);
        }
        path.line_to(right - r, bottom);
        if r > 0.0 {
            path.cubic_to((right - r + k, bottom), (right, bottom - r + k), right, bottom - r);
        }
        path.line_to(right, top + r);
        if r > 0.0 {
            path.cubic_to((right, top + r - k), (right - r + k, top), right - r, top);
        }
        path.close();
        path
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, c1: (f32, f32), c2: (f32, f32), x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo { c1, c2, x, y });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Winding of the polygon through the on-curve points, or `None`
    /// for degenerate paths with no enclosed area.
    pub fn winding(&self) -> Option<Direction> {
        let points: Vec<(f32, f32)> = self
            .commands
            .iter()
            .filter_map(PathCommand::end_point)
            .collect();
        if points.len() < 3 {
            return None;
        }

        let twice_area: f32 = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|((x0, y0), (x1, y1))| x0 * y1 - x1 * y0)
            .sum();

        // y grows downwards, so a negative shoelace sum reads counter-clockwise
        if twice_area < 0.0 {
            Some(Direction::CounterClockwise)
        } else if twice_area > 0.0 {
            Some(Direction::Clockwise)
        } else {
            None
        }
    }
}
