//! Roles and factions.
//!
//! `Role` is a closed enum: every phase of the game matches on it
//! exhaustively, so adding a role forces every decision point to be
//! revisited at compile time.

use serde::{Deserialize, Serialize};

/// A player's role, fixed at assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Faction role. Kills at night, loses when eliminated.
    Mafia,
    /// Non-special town role.
    Civilian,
    /// Can nullify one mafia kill per night by matching the save target.
    Doctor,
    /// Reveals one player's mafia/non-mafia status per night.
    Detective,
}

impl Role {
    /// The faction this role counts toward for win evaluation.
    ///
    /// Doctor and Detective count as plain Town here: the win condition
    /// only distinguishes mafia from everyone else.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            Role::Mafia => Faction::Mafia,
            Role::Civilian | Role::Doctor | Role::Detective => Faction::Town,
        }
    }

    /// Check whether this is the mafia role.
    #[must_use]
    pub const fn is_mafia(self) -> bool {
        matches!(self, Role::Mafia)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Mafia => write!(f, "mafia"),
            Role::Civilian => write!(f, "civilian"),
            Role::Doctor => write!(f, "doctor"),
            Role::Detective => write!(f, "detective"),
        }
    }
}

/// The two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The mafia members.
    Mafia,
    /// Everyone else: civilians, the doctor, the detective.
    Town,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Mafia => write!(f, "The mafia"),
            Faction::Town => write!(f, "The town"),
        }
    }
}
