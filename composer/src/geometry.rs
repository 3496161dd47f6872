//! Geometry primitives: positions, sizes, bounds and container math.
//!
//! All coordinates are page-local: the origin is the page's top-left corner
//! and `y` grows downward. Nothing here knows about elements or pages; the
//! element and engine layers build on these helpers.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point by `degrees` clockwise around `pivot`.
    #[must_use]
    pub fn rotated_around(self, pivot: Position, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: pivot.x + dx * cos - dy * sin,
            y: pivot.y + dx * sin + dy * cos,
        }
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn far_corner(&self) -> Position {
        Position::new(self.x + self.width, self.y + self.height)
    }

    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Whether `point` lies inside `bounds`, edges included.
#[must_use]
pub fn is_point_in_bounds(point: Position, bounds: &Bounds) -> bool {
    point.x >= bounds.x
        && point.x <= bounds.x + bounds.width
        && point.y >= bounds.y
        && point.y <= bounds.y + bounds.height
}

/// Clamp a box's position so the whole box stays inside
/// `[0, container_w] × [0, container_h]`.
///
/// A box larger than the container on some axis is pinned to 0 on that axis.
#[must_use]
pub fn clamp_to_container(x: f64, y: f64, w: f64, h: f64, container_w: f64, container_h: f64) -> (f64, f64) {
    (clamp_axis(x, w, container_w), clamp_axis(y, h, container_h))
}

fn clamp_axis(pos: f64, len: f64, container: f64) -> f64 {
    let max = (container - len).max(0.0);
    pos.clamp(0.0, max)
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// A non-positive grid disables snapping and returns `value` unchanged.
#[must_use]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Smallest axis-aligned box containing every point, or `None` for no points.
#[must_use]
pub fn bounds_of(points: &[Position]) -> Option<Bounds> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
