//! Placement engine: click-to-place players and the ball.
//!
//! Labels are team-scoped: the first centre-mid on a team is `CM`, the second
//! `CM2`, and so on. An away `CM` does not bump the home count.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::doc::{Ball, Document, Player, Position, Team, new_id};
use crate::geometry::Point;

/// Default label for the next `position` player on `team` given `players`.
#[must_use]
pub fn next_label(players: &[Player], position: Position, team: Team) -> String {
    let count = players
        .iter()
        .filter(|p| p.position == position && p.team == team)
        .count();
    if count == 0 {
        position.code().to_string()
    } else {
        format!("{}{}", position.code(), count + 1)
    }
}

/// Build a new player at `at` with a fresh id and auto label.
#[must_use]
pub fn new_player(doc: &Document, position: Position, team: Team, at: Point) -> Player {
    Player {
        id: new_id(),
        position,
        label: next_label(&doc.players, position, team),
        pos: at,
        team,
    }
}

/// `doc` with a new player appended at `at`.
#[must_use]
pub fn place_player(doc: &Document, position: Position, team: Team, at: Point) -> Document {
    doc.with_player(new_player(doc, position, team, at))
}

/// `doc` with the ball at `at`. Any existing ball is replaced.
#[must_use]
pub fn place_ball(doc: &Document, at: Point) -> Document {
    doc.with_ball(Ball { id: new_id(), pos: at })
}
