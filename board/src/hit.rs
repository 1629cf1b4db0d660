#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{BALL_RADIUS_RATIO, CURVE_SEGMENTS};
use crate::doc::{Area, Arrow, ArrowKind, Document, EntityId};
use crate::geometry::{Point, curve_control_point, point_polyline_distance, point_segment_distance, polygon_contains, quadratic_point};

/// An annotation under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationHit {
    Arrow(EntityId),
    Area(EntityId),
}

impl AnnotationHit {
    #[must_use]
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Arrow(id) | Self::Area(id) => id,
        }
    }
}

/// A token under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenHit {
    Player(EntityId),
    Ball,
}

/// Points along the rendered arrow stroke.
#[must_use]
pub fn arrow_polyline(arrow: &Arrow) -> Vec<Point> {
    match arrow.kind {
        ArrowKind::Straight => vec![arrow.from, arrow.to],
        ArrowKind::Curved => {
            let control = curve_control_point(arrow.from, arrow.to);
            #[allow(clippy::cast_precision_loss)]
            let steps = CURVE_SEGMENTS as f64;
            (0..=CURVE_SEGMENTS)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f64 / steps;
                    quadratic_point(arrow.from, control, arrow.to, t)
                })
                .collect()
        }
    }
}

/// Distance from `pt` to the arrow's rendered stroke.
#[must_use]
pub fn arrow_distance(arrow: &Arrow, pt: Point) -> f64 {
    match arrow.kind {
        ArrowKind::Straight => point_segment_distance(pt, arrow.from, arrow.to),
        ArrowKind::Curved => point_polyline_distance(pt, &arrow_polyline(arrow)).unwrap_or(f64::INFINITY),
    }
}

/// Whether `pt` lands on the area's stroke or, for closed areas, its interior.
#[must_use]
pub fn area_contains(area: &Area, pt: Point, tolerance: f64) -> bool {
    if area.closed && polygon_contains(&area.points, pt) {
        return true;
    }
    let on_outline = point_polyline_distance(pt, &area.points).is_some_and(|d| d <= tolerance);
    let on_closing_edge = area.closed
        && match (area.points.first(), area.points.last()) {
            (Some(first), Some(last)) => point_segment_distance(pt, *last, *first) <= tolerance,
            _ => false,
        };
    on_outline || on_closing_edge
}

/// Topmost annotation under `pt`.
///
/// Arrows render above areas, and later entries above earlier ones, so
/// arrows are checked newest-first before areas newest-first.
#[must_use]
pub fn hit_annotation(doc: &Document, pt: Point, tolerance: f64) -> Option<AnnotationHit> {
    if let Some(arrow) = doc.arrows.iter().rev().find(|a| arrow_distance(a, pt) <= tolerance) {
        return Some(AnnotationHit::Arrow(arrow.id.clone()));
    }
    doc.areas
        .iter()
        .rev()
        .find(|a| area_contains(a, pt, tolerance))
        .map(|a| AnnotationHit::Area(a.id.clone()))
}

/// Every annotation under `pt`, topmost first.
#[must_use]
pub fn hit_annotations(doc: &Document, pt: Point, tolerance: f64) -> Vec<AnnotationHit> {
    let arrows = doc
        .arrows
        .iter()
        .rev()
        .filter(|a| arrow_distance(a, pt) <= tolerance)
        .map(|a| AnnotationHit::Arrow(a.id.clone()));
    let areas = doc
        .areas
        .iter()
        .rev()
        .filter(|a| area_contains(a, pt, tolerance))
        .map(|a| AnnotationHit::Area(a.id.clone()));
    arrows.chain(areas).collect()
}

/// Topmost token under `pt`. `radius` is the player token radius; the ball is
/// smaller by [`BALL_RADIUS_RATIO`] and renders above players.
#[must_use]
pub fn hit_token(doc: &Document, pt: Point, radius: f64) -> Option<TokenHit> {
    let ball_radius = radius * BALL_RADIUS_RATIO;
    if doc.ball.as_ref().is_some_and(|b| b.pos.distance(pt) <= ball_radius) {
        return Some(TokenHit::Ball);
    }
    doc.players
        .iter()
        .rev()
        .find(|p| p.pos.distance(pt) <= radius)
        .map(|p| TokenHit::Player(p.id.clone()))
}
