//! Formation presets that bulk-replace the player set.
//!
//! Preset coordinates are for the home side attacking left to right (goal on
//! the left, `x = 0`). Away formations are mirrored across the halfway line.

#[cfg(test)]
#[path = "formation_test.rs"]
mod formation_test;

use crate::consts::BOARD_WIDTH;
use crate::doc::{Player, Position, Team, new_id};
use crate::geometry::Point;
use crate::placement::next_label;

use crate::doc::Position::{
    AttackingMidfield as CAM, CenterBack as CB, CenterForward as CF, CenterMidfield as CM, DefensiveMidfield as CDM,
    Goalkeeper as GK, LeftBack as LB, LeftMidfield as LM, LeftWing as LW, RightBack as RB, RightMidfield as RM,
    RightWing as RW, Striker as ST,
};

/// A named preset: eleven `(position, x, y)` slots.
#[derive(Debug, Clone, Copy)]
pub struct Formation {
    pub name: &'static str,
    pub slots: &'static [(Position, f64, f64)],
}

pub const FORMATIONS: &[Formation] = &[
    Formation {
        name: "4-4-2",
        slots: &[
            (GK, 40.0, 200.0),
            (LB, 130.0, 70.0),
            (CB, 120.0, 160.0),
            (CB, 120.0, 240.0),
            (RB, 130.0, 330.0),
            (LM, 270.0, 70.0),
            (CM, 250.0, 160.0),
            (CM, 250.0, 240.0),
            (RM, 270.0, 330.0),
            (ST, 420.0, 160.0),
            (ST, 420.0, 240.0),
        ],
    },
    Formation {
        name: "4-3-3",
        slots: &[
            (GK, 40.0, 200.0),
            (LB, 130.0, 70.0),
            (CB, 120.0, 160.0),
            (CB, 120.0, 240.0),
            (RB, 130.0, 330.0),
            (CM, 250.0, 120.0),
            (CDM, 220.0, 200.0),
            (CM, 250.0, 280.0),
            (LW, 410.0, 80.0),
            (ST, 440.0, 200.0),
            (RW, 410.0, 320.0),
        ],
    },
    Formation {
        name: "3-5-2",
        slots: &[
            (GK, 40.0, 200.0),
            (CB, 120.0, 120.0),
            (CB, 110.0, 200.0),
            (CB, 120.0, 280.0),
            (LM, 260.0, 50.0),
            (CM, 240.0, 140.0),
            (CDM, 210.0, 200.0),
            (CM, 240.0, 260.0),
            (RM, 260.0, 350.0),
            (ST, 420.0, 160.0),
            (ST, 420.0, 240.0),
        ],
    },
    Formation {
        name: "4-2-3-1",
        slots: &[
            (GK, 40.0, 200.0),
            (LB, 130.0, 70.0),
            (CB, 120.0, 160.0),
            (CB, 120.0, 240.0),
            (RB, 130.0, 330.0),
            (CDM, 220.0, 160.0),
            (CDM, 220.0, 240.0),
            (LW, 340.0, 80.0),
            (CAM, 330.0, 200.0),
            (RW, 340.0, 320.0),
            (CF, 440.0, 200.0),
        ],
    },
    Formation {
        name: "5-3-2",
        slots: &[
            (GK, 40.0, 200.0),
            (LB, 150.0, 50.0),
            (CB, 120.0, 130.0),
            (CB, 110.0, 200.0),
            (CB, 120.0, 270.0),
            (RB, 150.0, 350.0),
            (CM, 260.0, 120.0),
            (CM, 240.0, 200.0),
            (CM, 260.0, 280.0),
            (ST, 410.0, 160.0),
            (ST, 410.0, 240.0),
        ],
    },
];

/// Look up a preset by exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Formation> {
    FORMATIONS.iter().find(|f| f.name == name)
}

/// Names of every preset, in menu order.
pub fn names() -> impl Iterator<Item = &'static str> {
    FORMATIONS.iter().map(|f| f.name)
}

impl Formation {
    /// Fresh players for this preset on `team`, labelled like hand placement.
    #[must_use]
    pub fn players(&self, team: Team) -> Vec<Player> {
        let mut players: Vec<Player> = Vec::with_capacity(self.slots.len());
        for &(position, x, y) in self.slots {
            let x = match team {
                Team::Home => x,
                Team::Away => BOARD_WIDTH - x,
            };
            let label = next_label(&players, position, team);
            players.push(Player { id: new_id(), position, label, pos: Point::new(x, y), team });
        }
        players
    }
}
