//! Drawing engine: turns a pointer gesture into a live-preview sketch and,
//! on release, into a committed arrow or area.
//!
//! A [`Sketch`] lives only in transient input state. Moving the pointer
//! updates it in place and never touches history. [`Sketch::finish`] applies
//! the minimum-distance rule and stamps a fresh id and the staged stroke on
//! the result.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::consts::MIN_DRAW_DISTANCE;
use crate::doc::{Area, Arrow, ArrowKind, Color, Document, LineStyle, new_id};
use crate::geometry::Point;
use crate::input::AreaMode;

/// Stroke parameters staged for the next committed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeStyle {
    pub color: Color,
    pub style: LineStyle,
    /// Only consulted for arrows.
    pub kind: ArrowKind,
}

/// A finished or previewed annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Arrow(Arrow),
    Area(Area),
}

impl Shape {
    /// Append the shape to the matching collection of `doc`.
    #[must_use]
    pub fn append_to(self, doc: &Document) -> Document {
        match self {
            Self::Arrow(arrow) => doc.with_arrow(arrow),
            Self::Area(area) => doc.with_area(area),
        }
    }
}

/// In-progress drawing gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Sketch {
    Arrow {
        from: Point,
        to: Point,
    },
    Area {
        mode: AreaMode,
        start: Point,
        current: Point,
        /// Sampled path; only grows for freehand and path modes.
        points: Vec<Point>,
        /// Furthest the pointer has been from `start`.
        reach: f64,
    },
}

impl Sketch {
    /// Pointer-down in the arrow tool. The preview starts as a zero-length arrow.
    #[must_use]
    pub fn begin_arrow(at: Point) -> Self {
        Self::Arrow { from: at, to: at }
    }

    /// Pointer-down in the area tool.
    #[must_use]
    pub fn begin_area(mode: AreaMode, at: Point) -> Self {
        Self::Area { mode, start: at, current: at, points: vec![at], reach: 0.0 }
    }

    /// Pointer-move. `spacing` is the minimum gap between sampled area points.
    pub fn extend(&mut self, at: Point, spacing: f64) {
        match self {
            Self::Arrow { to, .. } => *to = at,
            Self::Area { mode, start, current, points, reach } => {
                *current = at;
                *reach = reach.max(start.distance(at));
                if *mode != AreaMode::Rectangle {
                    let far_enough = points.last().is_none_or(|last| last.distance(at) >= spacing);
                    if far_enough {
                        points.push(at);
                    }
                }
            }
        }
    }

    /// How far the gesture has travelled, for the accidental-click rule.
    ///
    /// Arrows measure `from -> to`. Rectangles measure the drag diagonal.
    /// Freehand shapes measure their furthest excursion from the start so a
    /// loop that ends where it began still counts.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        match self {
            Self::Arrow { from, to } => from.distance(*to),
            Self::Area { mode: AreaMode::Rectangle, start, current, .. } => start.distance(*current),
            Self::Area { reach, .. } => *reach,
        }
    }

    /// The sketch rendered as a shape with an empty id.
    #[must_use]
    pub fn preview(&self, stroke: StrokeStyle) -> Shape {
        self.to_shape(String::new(), stroke)
    }

    /// Complete the gesture at `at`. Returns `None` when the gesture is too
    /// short to be anything but a click.
    #[must_use]
    pub fn finish(mut self, at: Point, stroke: StrokeStyle, spacing: f64) -> Option<Shape> {
        self.extend(at, spacing);
        if let Self::Area { mode, current, points, .. } = &mut self {
            if *mode != AreaMode::Rectangle && points.last() != Some(current) {
                points.push(*current);
            }
        }
        if self.displacement() <= MIN_DRAW_DISTANCE {
            return None;
        }
        Some(self.to_shape(new_id(), stroke))
    }

    fn to_shape(&self, id: String, stroke: StrokeStyle) -> Shape {
        match self {
            Self::Arrow { from, to } => Shape::Arrow(Arrow {
                id,
                from: *from,
                to: *to,
                color: stroke.color,
                style: stroke.style,
                kind: stroke.kind,
            }),
            Self::Area { mode, start, current, points, .. } => {
                let points = match mode {
                    AreaMode::Rectangle => rectangle_corners(*start, *current),
                    AreaMode::Freehand | AreaMode::Path => points.clone(),
                };
                Shape::Area(Area {
                    id,
                    points,
                    closed: *mode != AreaMode::Path,
                    color: stroke.color,
                    style: stroke.style,
                })
            }
        }
    }
}

/// Corners of the axis-aligned rectangle spanned by `a` and `b`, clockwise from `a`.
fn rectangle_corners(a: Point, b: Point) -> Vec<Point> {
    vec![a, Point::new(b.x, a.y), b, Point::new(a.x, b.y)]
}
