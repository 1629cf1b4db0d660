//! Rendering: path data for annotations and a Canvas2D scene painter.
//!
//! The path builders are pure and shared by any renderer (SVG hosts use the
//! strings directly). [`draw`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; it reads a [`Scene`] and never
//! mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use crate::consts::{BALL_RADIUS_RATIO, BOARD_HEIGHT, BOARD_WIDTH};
use crate::doc::{Area, Arrow, ArrowKind, Document, EntityId, LineStyle, Player, Team};
use crate::drag::DragTarget;
use crate::draw::Shape;
use crate::geometry::{BoardRect, Point, curve_control_point};

/// Arrowhead length in logical units.
const ARROW_SIZE: f64 = 10.0;

/// Arrowhead half-angle in radians (~30°).
const ARROW_ANGLE: f64 = PI / 6.0;

const STROKE_WIDTH: f64 = 2.5;
const AREA_FILL_ALPHA: f64 = 0.2;
const PREVIEW_ALPHA: f64 = 0.6;
const PENDING_ERASE_ALPHA: f64 = 0.25;

const HOME_FILL: &str = "#2563EB";
const AWAY_FILL: &str = "#DC2626";
const SELECTION_STROKE: &str = "#FACC15";

// =============================================================
// Path data
// =============================================================

/// SVG path data for an arrow's shaft.
///
/// Straight: `M from L to`. Curved: `M from Q control to`.
#[must_use]
pub fn arrow_path(arrow: &Arrow) -> String {
    let (from, to) = (arrow.from, arrow.to);
    match arrow.kind {
        ArrowKind::Straight => format!("M {} {} L {} {}", from.x, from.y, to.x, to.y),
        ArrowKind::Curved => {
            let c = curve_control_point(from, to);
            format!("M {} {} Q {} {} {} {}", from.x, from.y, c.x, c.y, to.x, to.y)
        }
    }
}

/// SVG path data for an area. Closed areas end with `Z`. Empty for no points.
#[must_use]
pub fn area_path(area: &Area) -> String {
    let mut parts: Vec<String> = area
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd} {} {}", p.x, p.y)
        })
        .collect();
    if area.closed && !parts.is_empty() {
        parts.push("Z".to_string());
    }
    parts.join(" ")
}

/// Arrowhead triangle `[tip, left wing, right wing]`, aligned with the
/// shaft's direction at the tip.
#[must_use]
pub fn arrowhead(arrow: &Arrow) -> [Point; 3] {
    let tail = match arrow.kind {
        ArrowKind::Straight => arrow.from,
        ArrowKind::Curved => curve_control_point(arrow.from, arrow.to),
    };
    let tip = arrow.to;
    let angle = (tip.y - tail.y).atan2(tip.x - tail.x);
    let wing = |offset: f64| {
        Point::new(
            ARROW_SIZE.mul_add(-(angle + offset).cos(), tip.x),
            ARROW_SIZE.mul_add(-(angle + offset).sin(), tip.y),
        )
    };
    [tip, wing(-ARROW_ANGLE), wing(ARROW_ANGLE)]
}

/// Canvas line-dash segments for a stroke style.
#[must_use]
pub fn dash_pattern(style: LineStyle) -> &'static [f64] {
    match style {
        LineStyle::Solid => &[],
        LineStyle::Dashed => &[8.0, 6.0],
    }
}

// =============================================================
// Scene
// =============================================================

/// Read-only view of everything the painter needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    pub doc: &'a Document,
    /// Live drawing preview.
    pub preview: Option<Shape>,
    /// Token being dragged and its logical offset.
    pub drag: Option<(&'a DragTarget, Point)>,
    /// Annotations a scrub erase will remove on release.
    pub pending_erase: &'a [EntityId],
    pub selected: Option<&'a str>,
    /// Player token radius; must match the radius used for hit-testing.
    pub token_radius: f64,
    /// Rendered board size in CSS pixels.
    pub rect: BoardRect,
    pub dpr: f64,
}

/// Paint the scene. Logical space is scaled onto the rendered board.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    let (sx, sy) = scene.rect.scale();
    ctx.set_transform(sx * scene.dpr, 0.0, 0.0, sy * scene.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, BOARD_WIDTH, BOARD_HEIGHT);

    // Layer 1: areas, then arrows, oldest first.
    for area in &scene.doc.areas {
        let alpha = if scene.pending_erase.contains(&area.id) { PENDING_ERASE_ALPHA } else { 1.0 };
        draw_area(ctx, area, alpha)?;
    }
    for arrow in &scene.doc.arrows {
        let alpha = if scene.pending_erase.contains(&arrow.id) { PENDING_ERASE_ALPHA } else { 1.0 };
        draw_arrow(ctx, arrow, alpha)?;
    }

    // Layer 2: live preview.
    match &scene.preview {
        Some(Shape::Arrow(arrow)) => draw_arrow(ctx, arrow, PREVIEW_ALPHA)?,
        Some(Shape::Area(area)) => draw_area(ctx, area, PREVIEW_ALPHA)?,
        None => {}
    }

    // Layer 3: tokens, with the dragged one offset.
    for player in &scene.doc.players {
        let offset = match scene.drag {
            Some((DragTarget::Player(id), offset)) if *id == player.id => offset,
            _ => Point::default(),
        };
        let selected = scene.selected == Some(player.id.as_str());
        draw_player(ctx, player, offset, selected, scene.token_radius)?;
    }
    if let Some(ball) = &scene.doc.ball {
        let offset = match scene.drag {
            Some((DragTarget::Ball, offset)) => offset,
            _ => Point::default(),
        };
        draw_ball(ctx, ball.pos + offset, scene.token_radius * BALL_RADIUS_RATIO)?;
    }

    Ok(())
}

// =============================================================
// Annotation renderers
// =============================================================

fn apply_stroke(ctx: &CanvasRenderingContext2d, css: &str, style: LineStyle) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(css);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    let dash = js_sys::Array::new();
    for segment in dash_pattern(style) {
        dash.push(&JsValue::from_f64(*segment));
    }
    ctx.set_line_dash(&dash)
}

fn draw_arrow(ctx: &CanvasRenderingContext2d, arrow: &Arrow, alpha: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_alpha(alpha);
    apply_stroke(ctx, arrow.color.css(), arrow.style)?;
    let path = Path2d::new_with_path_string(&arrow_path(arrow))?;
    ctx.stroke_with_path(&path);

    let [tip, left, right] = arrowhead(arrow);
    ctx.set_fill_style_str(arrow.color.css());
    ctx.begin_path();
    ctx.move_to(tip.x, tip.y);
    ctx.line_to(left.x, left.y);
    ctx.line_to(right.x, right.y);
    ctx.close_path();
    ctx.fill();
    ctx.restore();
    Ok(())
}

fn draw_area(ctx: &CanvasRenderingContext2d, area: &Area, alpha: f64) -> Result<(), JsValue> {
    let data = area_path(area);
    if data.is_empty() {
        return Ok(());
    }
    ctx.save();
    let path = Path2d::new_with_path_string(&data)?;
    if area.closed {
        ctx.set_global_alpha(alpha * AREA_FILL_ALPHA);
        ctx.set_fill_style_str(area.color.css());
        ctx.fill_with_path_2d(&path);
    }
    ctx.set_global_alpha(alpha);
    apply_stroke(ctx, area.color.css(), area.style)?;
    ctx.stroke_with_path(&path);
    ctx.restore();
    Ok(())
}

// =============================================================
// Token renderers
// =============================================================

fn draw_player(
    ctx: &CanvasRenderingContext2d,
    player: &Player,
    offset: Point,
    selected: bool,
    radius: f64,
) -> Result<(), JsValue> {
    let center = player.pos + offset;
    ctx.save();
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(match player.team {
        Team::Home => HOME_FILL,
        Team::Away => AWAY_FILL,
    });
    ctx.fill();
    ctx.set_line_width(if selected { 3.0 } else { 1.5 });
    ctx.set_stroke_style_str(if selected { SELECTION_STROKE } else { "#FFFFFF" });
    ctx.stroke();

    ctx.set_fill_style_str("#FFFFFF");
    ctx.set_font("bold 9px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&player.label, center.x, center.y)?;
    ctx.restore();
    Ok(())
}

fn draw_ball(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str("#FFFFFF");
    ctx.fill();
    ctx.set_line_width(1.5);
    ctx.set_stroke_style_str("#111111");
    ctx.stroke();
    ctx.restore();
    Ok(())
}
