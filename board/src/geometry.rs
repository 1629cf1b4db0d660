//! Geometry utilities: points, the rendered-board scale, curve control
//! points, and distance queries used by hit-testing.
//!
//! Two coordinate spaces meet here. *Logical* space is the fixed
//! `BOARD_WIDTH x BOARD_HEIGHT` rectangle every document is stored in.
//! *Pixel* space is whatever size the host happens to render the board at.
//! [`BoardRect`] converts between the two.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, CURVE_INTENSITY};

/// A point (or delta) in either pixel or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Clamp into the logical board rectangle.
    #[must_use]
    pub fn clamp_to_board(self) -> Point {
        Point::new(self.x.clamp(0.0, BOARD_WIDTH), self.y.clamp(0.0, BOARD_HEIGHT))
    }

    /// Whether the point lies inside the logical board rectangle (edges included).
    #[must_use]
    pub fn is_on_board(self) -> bool {
        (0.0..=BOARD_WIDTH).contains(&self.x) && (0.0..=BOARD_HEIGHT).contains(&self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The measured size of the rendered board element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRect {
    pub width: f64,
    pub height: f64,
}

impl BoardRect {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A rect is usable only when both sides are positive and finite.
    /// Unlaid-out elements report `0 x 0`.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Rendered pixels per logical unit, per axis.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.width / BOARD_WIDTH, self.height / BOARD_HEIGHT)
    }

    /// Convert a pixel-space delta into a logical-space delta.
    #[must_use]
    pub fn pixel_delta_to_logical(&self, delta: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(delta.x / sx, delta.y / sy)
    }

    /// Convert a pixel offset from the board's top-left corner into a logical point.
    #[must_use]
    pub fn pixel_to_logical(&self, pixel: Point) -> Point {
        self.pixel_delta_to_logical(pixel)
    }

    /// Convert a logical point into a pixel offset from the board's top-left corner.
    #[must_use]
    pub fn logical_to_pixel(&self, logical: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(logical.x * sx, logical.y * sy)
    }
}

/// Control point of the quadratic Bézier used for a curved arrow.
///
/// The control point sits `CURVE_INTENSITY` units off the chord midpoint, a
/// quarter turn from the chord direction. On a y-down screen that is always
/// to the right when walking `from -> to`.
#[must_use]
pub fn curve_control_point(from: Point, to: Point) -> Point {
    let mid = from.midpoint(to);
    let angle = (to.y - from.y).atan2(to.x - from.x) + std::f64::consts::FRAC_PI_2;
    Point::new(
        CURVE_INTENSITY.mul_add(angle.cos(), mid.x),
        CURVE_INTENSITY.mul_add(angle.sin(), mid.y),
    )
}

/// Evaluate a quadratic Bézier at parameter `t` in `[0, 1]`.
#[must_use]
pub fn quadratic_point(p0: Point, control: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u;
    let b = 2.0 * u * t;
    let c = t * t;
    Point::new(
        a * p0.x + b * control.x + c * p1.x,
        a * p0.y + b * control.y + c * p1.y,
    )
}

/// Shortest distance from `p` to the segment `a..b`.
///
/// A degenerate segment (`a == b`) degrades to point distance.
#[must_use]
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Shortest distance from `p` to an open polyline. `None` for an empty polyline.
#[must_use]
pub fn point_polyline_distance(p: Point, points: &[Point]) -> Option<f64> {
    match points {
        [] => None,
        [only] => Some(p.distance(*only)),
        _ => points
            .windows(2)
            .map(|w| point_segment_distance(p, w[0], w[1]))
            .reduce(f64::min),
    }
}

/// Even-odd point-in-polygon test. Polygons with fewer than three vertices
/// contain nothing.
#[must_use]
pub fn polygon_contains(polygon: &[Point], p: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
