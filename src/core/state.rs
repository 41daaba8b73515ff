//! Game phase and faction tallies.
//!
//! `GameState` caches the living-member count of each faction. The
//! counts are derived from the roster once at game start and the engine
//! keeps them consistent with every kill. They only ever decrease.

use serde::{Deserialize, Serialize};

use super::role::Faction;
use super::roster::Roster;

/// The phase the game is currently in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Mafia, doctor, and detective act privately.
    Night,
    /// All living players vote; the plurality target is lynched.
    Day,
    /// One faction has been eliminated; the game is over.
    Terminal,
}

/// Phase plus cached faction counts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase. Games start at night.
    pub phase: Phase,
    living_mafia: usize,
    living_town: usize,
}

impl GameState {
    /// Derive the authoritative counts from a freshly assigned roster.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            phase: Phase::Night,
            living_mafia: roster.living_count(Faction::Mafia),
            living_town: roster.living_count(Faction::Town),
        }
    }

    /// Living mafia members.
    #[must_use]
    pub const fn living_mafia(&self) -> usize {
        self.living_mafia
    }

    /// Living non-mafia members (civilians, doctor, detective combined).
    #[must_use]
    pub const fn living_town(&self) -> usize {
        self.living_town
    }

    /// Take one off the mafia tally.
    pub(crate) fn record_mafia_death(&mut self) {
        debug_assert!(self.living_mafia > 0);
        self.living_mafia -= 1;
    }

    /// Take one off the town tally.
    pub(crate) fn record_town_death(&mut self) {
        debug_assert!(self.living_town > 0);
        self.living_town -= 1;
    }
}
