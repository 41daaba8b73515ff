//! Player identity and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 players.
//! Ids are 0-based roster positions and stay stable for the
//! whole game.
//!
//! ## Player
//!
//! Name and role are fixed at creation. The alive flag moves in one
//! direction only: a dead player never comes back.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use mafia_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant: identity, role, and alive state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: Role,
    alive: bool,
}

impl Player {
    /// Create a living player with a fixed name and role.
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            alive: true,
        }
    }

    /// This player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned role. Never changes after creation.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Whether this player is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark this player dead. Alive moves true→false exactly once;
    /// callers must not target a player that is already dead.
    pub(crate) fn kill(&mut self) {
        debug_assert!(self.alive, "kill() on a dead player");
        self.alive = false;
    }
}
