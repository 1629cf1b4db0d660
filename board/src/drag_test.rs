#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{Ball, Player, Position, Team};

const ACTIVATION: f64 = 5.0;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn player(id: &str, x: f64, y: f64) -> Player {
    Player { id: id.into(), position: Position::CenterMidfield, label: "CM".into(), pos: pt(x, y), team: Team::Home }
}

fn doc() -> Document {
    Document::new()
        .with_player(player("p1", 100.0, 100.0))
        .with_player(player("p2", 200.0, 200.0))
        .with_ball(Ball { id: "b".into(), pos: pt(300.0, 200.0) })
}

fn drag(target: DragTarget, dx: f64, dy: f64) -> DragState {
    DragState { delta_px: pt(dx, dy), ..DragState::new(1, target) }
}

fn half_scale() -> Option<BoardRect> {
    Some(BoardRect::new(300.0, 200.0))
}

fn committed(outcome: DropOutcome) -> Document {
    match outcome {
        DropOutcome::Commit(doc) => doc,
        other => panic!("expected commit, got {other:?}"),
    }
}

// =============================================================
// Reposition
// =============================================================

#[test]
fn player_moves_by_scaled_delta() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p1".into()), 30.0, 0.0), Some(DropTarget::Board), half_scale(), ACTIVATION));
    assert_eq!(next.player("p1").map(|p| p.pos), Some(pt(160.0, 100.0)));
}

#[test]
fn other_players_unchanged() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p1".into()), 30.0, 10.0), Some(DropTarget::Board), half_scale(), ACTIVATION));
    assert_eq!(next.player("p2"), d.player("p2"));
    assert_eq!(next.ball, d.ball);
}

#[test]
fn ball_moves_by_scaled_delta() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Ball, -20.0, 10.0), Some(DropTarget::Board), half_scale(), ACTIVATION));
    assert_eq!(next.ball.as_ref().map(|b| b.pos), Some(pt(260.0, 220.0)));
}

#[test]
fn drop_over_nothing_still_repositions() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p1".into()), 0.0, 30.0), None, half_scale(), ACTIVATION));
    assert_eq!(next.player("p1").map(|p| p.pos), Some(pt(100.0, 160.0)));
}

#[test]
fn reposition_is_clamped_to_board() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p1".into()), -500.0, 900.0), Some(DropTarget::Board), half_scale(), ACTIVATION));
    assert_eq!(next.player("p1").map(|p| p.pos), Some(pt(0.0, 400.0)));
}

#[test]
fn full_scale_board_is_identity() {
    let d = doc();
    let rect = Some(BoardRect::new(600.0, 400.0));
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p2".into()), 12.0, -8.0), Some(DropTarget::Board), rect, ACTIVATION));
    assert_eq!(next.player("p2").map(|p| p.pos), Some(pt(212.0, 192.0)));
}

// =============================================================
// Delete zone
// =============================================================

#[test]
fn delete_zone_removes_player() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p1".into()), 80.0, 0.0), Some(DropTarget::DeleteZone), half_scale(), ACTIVATION));
    assert!(next.player("p1").is_none());
    assert_eq!(next.players.len(), 1);
}

#[test]
fn delete_zone_removes_ball() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Ball, 80.0, 0.0), Some(DropTarget::DeleteZone), half_scale(), ACTIVATION));
    assert!(next.ball.is_none());
}

#[test]
fn delete_zone_wins_without_measurement_or_movement() {
    let d = doc();
    let next = committed(resolve_drop(&d, &drag(DragTarget::Player("p2".into()), 0.0, 0.0), Some(DropTarget::DeleteZone), None, ACTIVATION));
    assert!(next.player("p2").is_none());
}

// =============================================================
// Clicks, missing targets, unmeasured boards
// =============================================================

#[test]
fn tiny_drag_is_a_click() {
    let d = doc();
    let outcome = resolve_drop(&d, &drag(DragTarget::Player("p1".into()), 2.0, 2.0), Some(DropTarget::Board), half_scale(), ACTIVATION);
    assert_eq!(outcome, DropOutcome::Click);
}

#[test]
fn activated_drag_that_returns_near_start_still_moves() {
    let d = doc();
    let mut state = DragState::new(1, DragTarget::Player("p1".into()));
    state.track(pt(80.0, 0.0), ACTIVATION);
    state.track(pt(2.0, 0.0), ACTIVATION);
    assert!(state.activated);
    let next = committed(resolve_drop(&d, &state, Some(DropTarget::Board), half_scale(), ACTIVATION));
    assert_eq!(next.player("p1").unwrap().pos, pt(104.0, 100.0));
}

#[test]
fn track_below_activation_stays_a_click() {
    let mut state = DragState::new(1, DragTarget::Ball);
    state.track(pt(3.0, 0.0), ACTIVATION);
    state.track(pt(1.0, 1.0), ACTIVATION);
    assert!(!state.activated);
    assert!(state.is_click(ACTIVATION));
}

#[test]
fn missing_player_is_ignored() {
    let d = doc();
    let outcome = resolve_drop(&d, &drag(DragTarget::Player("gone".into()), 40.0, 0.0), Some(DropTarget::Board), half_scale(), ACTIVATION);
    assert_eq!(outcome, DropOutcome::Ignore);
    let outcome = resolve_drop(&d, &drag(DragTarget::Player("gone".into()), 40.0, 0.0), Some(DropTarget::DeleteZone), half_scale(), ACTIVATION);
    assert_eq!(outcome, DropOutcome::Ignore);
}

#[test]
fn missing_ball_is_ignored() {
    let d = doc().without_ball();
    let outcome = resolve_drop(&d, &drag(DragTarget::Ball, 40.0, 0.0), Some(DropTarget::Board), half_scale(), ACTIVATION);
    assert_eq!(outcome, DropOutcome::Ignore);
}

#[test]
fn unmeasured_board_is_ignored() {
    let d = doc();
    let outcome = resolve_drop(&d, &drag(DragTarget::Ball, 40.0, 0.0), Some(DropTarget::Board), None, ACTIVATION);
    assert_eq!(outcome, DropOutcome::Ignore);
    let outcome = resolve_drop(&d, &drag(DragTarget::Ball, 40.0, 0.0), Some(DropTarget::Board), Some(BoardRect::new(0.0, 0.0)), ACTIVATION);
    assert_eq!(outcome, DropOutcome::Ignore);
}

// =============================================================
// Preview
// =============================================================

#[test]
fn preview_offset_is_logical() {
    assert_eq!(preview_offset(&drag(DragTarget::Ball, 30.0, 15.0), half_scale()), pt(60.0, 30.0));
}

#[test]
fn preview_offset_zero_when_unmeasured() {
    assert_eq!(preview_offset(&drag(DragTarget::Ball, 30.0, 15.0), None), Point::default());
}
