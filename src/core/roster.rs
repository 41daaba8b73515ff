//! The ordered player roster.
//!
//! Insertion order is turn and display order. Ids are the roster
//! positions and never change; the only mutation the roster allows
//! after construction is killing a player.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::role::{Faction, Role};

/// Ordered collection of players, owned exclusively by the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from players whose ids match their positions.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");
        for (i, player) in players.iter().enumerate() {
            assert_eq!(player.id().index(), i, "Player id must equal roster position");
        }
        Self { players }
    }

    /// Number of players, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty. Never true for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by raw index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Iterate over all players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over living players in roster order.
    pub fn living(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Check that a raw index is in bounds and names a living player.
    #[must_use]
    pub fn is_living_index(&self, index: usize) -> bool {
        self.players.get(index).is_some_and(Player::is_alive)
    }

    /// First living player holding `role`, in roster order.
    #[must_use]
    pub fn first_living(&self, role: Role) -> Option<PlayerId> {
        self.living().find(|p| p.role() == role).map(Player::id)
    }

    /// Count living members of a faction.
    #[must_use]
    pub fn living_count(&self, faction: Faction) -> usize {
        self.living().filter(|p| p.role().faction() == faction).count()
    }

    /// Mark a player dead.
    pub(crate) fn kill(&mut self, id: PlayerId) {
        self.players[id.index()].kill();
    }
}
