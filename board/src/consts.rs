//! Shared numeric constants for the board crate.
//!
//! Every length here is in logical board units unless the name ends in `_PX`.

// ── Board ───────────────────────────────────────────────────────

/// Logical board width. Goal-left orientation: the home goal sits at `x = 0`.
pub const BOARD_WIDTH: f64 = 600.0;

/// Logical board height.
pub const BOARD_HEIGHT: f64 = 400.0;

// ── Drawing ─────────────────────────────────────────────────────

/// A draw gesture must travel strictly further than this to commit.
pub const MIN_DRAW_DISTANCE: f64 = 10.0;

/// Perpendicular offset of a curved arrow's control point from the chord midpoint.
pub const CURVE_INTENSITY: f64 = 30.0;

/// Minimum spacing between successive sampled points of a freehand area.
pub const AREA_SAMPLE_SPACING: f64 = 2.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Distance from a rendered stroke that still counts as a hit.
pub const HIT_TOLERANCE: f64 = 6.0;

/// Radius of a player token.
pub const TOKEN_RADIUS: f64 = 12.0;

/// Ball radius as a fraction of the token radius, for drawing and hit-testing.
pub const BALL_RADIUS_RATIO: f64 = 0.6;

/// Number of straight segments used to approximate a curved arrow.
pub const CURVE_SEGMENTS: usize = 24;

// ── Dragging ────────────────────────────────────────────────────

/// A token drag shorter than this (in rendered pixels) is treated as a click.
pub const DRAG_ACTIVATION_DISTANCE_PX: f64 = 5.0;
