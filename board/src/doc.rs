//! Document model: players, the ball, arrows, and areas, plus the aggregate
//! [`Document`] that is the sole unit of undo/redo.
//!
//! The serialized shape of [`Document`] is the one contract shared with the
//! document store and every renderer, so field names and enum spellings here
//! are fixed by serde attributes rather than by the Rust names.
//!
//! Documents are plain values: every edit produces a new `Document` through
//! one of the `with_*` / `without_*` builders and is committed through the
//! history manager.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

/// Opaque unique identifier for any document entity.
pub type EntityId = String;

/// Generate a fresh entity id.
#[must_use]
pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Playing position. Serialized as its short code, which doubles as the
/// default label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "CB")]
    CenterBack,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "CDM")]
    DefensiveMidfield,
    #[serde(rename = "CM")]
    CenterMidfield,
    #[serde(rename = "CAM")]
    AttackingMidfield,
    #[serde(rename = "LM")]
    LeftMidfield,
    #[serde(rename = "RM")]
    RightMidfield,
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "RW")]
    RightWing,
    #[serde(rename = "CF")]
    CenterForward,
    #[serde(rename = "ST")]
    Striker,
}

impl Position {
    /// Every position, in picker order (back to front).
    pub const ALL: [Position; 13] = [
        Self::Goalkeeper,
        Self::LeftBack,
        Self::CenterBack,
        Self::RightBack,
        Self::DefensiveMidfield,
        Self::CenterMidfield,
        Self::AttackingMidfield,
        Self::LeftMidfield,
        Self::RightMidfield,
        Self::LeftWing,
        Self::RightWing,
        Self::CenterForward,
        Self::Striker,
    ];

    /// Short code, e.g. `"CM"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::LeftBack => "LB",
            Self::CenterBack => "CB",
            Self::RightBack => "RB",
            Self::DefensiveMidfield => "CDM",
            Self::CenterMidfield => "CM",
            Self::AttackingMidfield => "CAM",
            Self::LeftMidfield => "LM",
            Self::RightMidfield => "RM",
            Self::LeftWing => "LW",
            Self::RightWing => "RW",
            Self::CenterForward => "CF",
            Self::Striker => "ST",
        }
    }

    /// Parse a short code. Case-sensitive, matching the wire spelling.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Which side a player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    Home,
    Away,
}

/// A player token on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub position: Position,
    /// Display text. Defaults to the position code, numbered for duplicates.
    pub label: String,
    pub pos: Point,
    #[serde(default)]
    pub team: Team,
}

/// The ball. At most one per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: EntityId,
    pub pos: Point,
}

/// Annotation color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Yellow,
    Red,
    Blue,
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 5] = [Self::Yellow, Self::Red, Self::Blue, Self::White, Self::Black];

    /// CSS color used when stroking.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Yellow => "#FACC15",
            Self::Red => "#EF4444",
            Self::Blue => "#3B82F6",
            Self::White => "#FFFFFF",
            Self::Black => "#111111",
        }
    }
}

/// Stroke style shared by arrows and areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Arrow geometry: a straight segment or a single quadratic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    #[default]
    Straight,
    Curved,
}

/// A directional annotation. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub id: EntityId,
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub style: LineStyle,
    #[serde(rename = "type")]
    pub kind: ArrowKind,
}

/// A freeform region or path. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: EntityId,
    pub points: Vec<Point>,
    /// Closed areas are filled polygons; open ones are polylines.
    #[serde(default = "default_closed")]
    pub closed: bool,
    pub color: Color,
    pub style: LineStyle,
}

fn default_closed() -> bool {
    true
}

/// The aggregate document. The history manager snapshots whole documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub arrows: Vec<Arrow>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball: Option<Ball>,
}

impl Document {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document holds nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.arrows.is_empty() && self.areas.is_empty() && self.ball.is_none()
    }

    // --- Queries ---

    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn arrow(&self, id: &str) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    // --- Builders ---

    #[must_use]
    pub fn with_player(&self, player: Player) -> Self {
        let mut next = self.clone();
        next.players.push(player);
        next
    }

    #[must_use]
    pub fn with_players(&self, players: Vec<Player>) -> Self {
        Self { players, ..self.clone() }
    }

    #[must_use]
    pub fn with_arrow(&self, arrow: Arrow) -> Self {
        let mut next = self.clone();
        next.arrows.push(arrow);
        next
    }

    #[must_use]
    pub fn with_area(&self, area: Area) -> Self {
        let mut next = self.clone();
        next.areas.push(area);
        next
    }

    /// Replace (or set) the ball.
    #[must_use]
    pub fn with_ball(&self, ball: Ball) -> Self {
        Self { ball: Some(ball), ..self.clone() }
    }

    /// Apply `edit` to the player with `id`. Other players are unchanged.
    #[must_use]
    pub fn with_player_edit(&self, id: &str, edit: impl FnOnce(&mut Player)) -> Self {
        let mut next = self.clone();
        if let Some(player) = next.players.iter_mut().find(|p| p.id == id) {
            edit(player);
        }
        next
    }

    #[must_use]
    pub fn without_player(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.players.retain(|p| p.id != id);
        next
    }

    #[must_use]
    pub fn without_ball(&self) -> Self {
        Self { ball: None, ..self.clone() }
    }

    /// Remove every arrow and area whose id is in `ids`.
    #[must_use]
    pub fn without_annotations(&self, ids: &[EntityId]) -> Self {
        let mut next = self.clone();
        next.arrows.retain(|a| !ids.contains(&a.id));
        next.areas.retain(|a| !ids.contains(&a.id));
        next
    }
}
