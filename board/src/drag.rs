//! Drag/reposition engine.
//!
//! DESIGN
//! ======
//! The host's drag layer is abstracted as a gesture recognizer that calls a
//! [`GestureSink`]: start (which token), move (total pixel delta so far), end
//! (where it was dropped). Moves only update [`DragState`] for preview. The
//! document changes once, in [`resolve_drop`], when the gesture ends.
//!
//! Deltas arrive in rendered pixels. The rendered board may be any size, so
//! the delta is rescaled through the measured [`BoardRect`] into logical
//! units. If the board was never measured, a [`BoardMeasure`] fallback is
//! asked at drop time rather than losing the move.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::doc::{Document, EntityId};
use crate::engine::Action;
use crate::geometry::{BoardRect, Point};

/// Pointer identifier reported by the host.
pub type PointerId = i32;

/// The token being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Player(EntityId),
    Ball,
}

/// Where a drag was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The board surface: reposition.
    Board,
    /// The delete zone: remove the dragged token.
    DeleteZone,
}

/// Live drag, kept outside history.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub pointer_id: PointerId,
    pub target: DragTarget,
    /// Total pixel displacement since the gesture started.
    pub delta_px: Point,
    /// Set once the pointer has travelled the activation distance. Stays set
    /// even if the pointer comes back.
    pub activated: bool,
}

impl DragState {
    #[must_use]
    pub fn new(pointer_id: PointerId, target: DragTarget) -> Self {
        Self { pointer_id, target, delta_px: Point::default(), activated: false }
    }

    /// Record the latest total delta and latch activation.
    pub fn track(&mut self, delta_px: Point, activation_px: f64) {
        self.delta_px = delta_px;
        if delta_px.distance(Point::default()) >= activation_px {
            self.activated = true;
        }
    }

    /// Whether the gesture never became a drag.
    #[must_use]
    pub fn is_click(&self, activation_px: f64) -> bool {
        !self.activated && self.delta_px.distance(Point::default()) < activation_px
    }
}

/// Measures the rendered board on demand.
pub trait BoardMeasure {
    /// Current rendered size, or `None` when the board is not laid out.
    fn measure(&self) -> Option<BoardRect>;
}

/// Receiver for drag gestures from the host's recognizer.
pub trait GestureSink {
    /// A drag began on `target`.
    fn on_gesture_start(&mut self, pointer_id: PointerId, target: DragTarget) -> Vec<Action>;

    /// The pointer moved. `delta_px` is the total displacement since start.
    fn on_gesture_move(&mut self, delta_px: Point) -> Vec<Action>;

    /// The drag ended over `drop`, or over nothing droppable.
    fn on_gesture_end(&mut self, drop: Option<DropTarget>) -> Vec<Action>;
}

/// What a finished drag does to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Commit this document.
    Commit(Document),
    /// The pointer barely moved: treat as a click on the target.
    Click,
    /// Nothing to do (target gone, or board size unknown).
    Ignore,
}

/// Resolve a finished drag against the latest document.
///
/// The delete zone wins over everything else. Otherwise a gesture that never
/// travelled `activation_px` is a click, and an activated one moves the target
/// by the logical equivalent of its final pixel delta, clamped to the board.
#[must_use]
pub fn resolve_drop(
    doc: &Document,
    drag: &DragState,
    drop: Option<DropTarget>,
    rect: Option<BoardRect>,
    activation_px: f64,
) -> DropOutcome {
    if drop == Some(DropTarget::DeleteZone) {
        return match &drag.target {
            DragTarget::Ball if doc.ball.is_some() => DropOutcome::Commit(doc.without_ball()),
            DragTarget::Player(id) if doc.player(id).is_some() => DropOutcome::Commit(doc.without_player(id)),
            _ => DropOutcome::Ignore,
        };
    }

    if drag.is_click(activation_px) {
        return DropOutcome::Click;
    }

    let Some(rect) = rect.filter(BoardRect::is_measured) else {
        return DropOutcome::Ignore;
    };
    let delta = rect.pixel_delta_to_logical(drag.delta_px);

    match &drag.target {
        DragTarget::Ball => match &doc.ball {
            Some(ball) => {
                let mut ball = ball.clone();
                ball.pos = (ball.pos + delta).clamp_to_board();
                DropOutcome::Commit(doc.with_ball(ball))
            }
            None => DropOutcome::Ignore,
        },
        DragTarget::Player(id) => {
            if doc.player(id).is_none() {
                return DropOutcome::Ignore;
            }
            DropOutcome::Commit(doc.with_player_edit(id, |p| p.pos = (p.pos + delta).clamp_to_board()))
        }
    }
}

/// Logical offset to draw the dragged token at while the drag is live.
#[must_use]
pub fn preview_offset(drag: &DragState, rect: Option<BoardRect>) -> Point {
    rect.filter(BoardRect::is_measured)
        .map_or(Point::default(), |r| r.pixel_delta_to_logical(drag.delta_px))
}
