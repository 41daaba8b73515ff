//! Role quotas and random assignment.
//!
//! Quotas are fixed proportions of the player count. Assignment builds
//! the role multiset, applies one uniformly random permutation to it,
//! and zips the permuted roles with the names in their original order —
//! the name order itself is never reshuffled.

use tracing::debug;

use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::role::Role;
use crate::core::roster::Roster;
use crate::error::ConfigError;

/// How many of each role a cast of a given size receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleQuotas {
    /// max(1, ⌊n/3⌋) mafia members.
    pub mafia: usize,
    /// Always one doctor.
    pub doctors: usize,
    /// Always one detective.
    pub detectives: usize,
    /// Whoever is left.
    pub civilians: usize,
}

impl RoleQuotas {
    /// Compute the quotas for `player_count` players.
    ///
    /// Fails when the count is too small to seat the mafia quota plus
    /// the doctor and the detective, before any game state exists.
    pub fn for_player_count(player_count: usize) -> Result<Self, ConfigError> {
        let mafia = (player_count / 3).max(1);
        let reserved = mafia + 2;
        if player_count < reserved {
            return Err(ConfigError {
                player_count,
                mafia,
            });
        }

        Ok(Self {
            mafia,
            doctors: 1,
            detectives: 1,
            civilians: player_count - reserved,
        })
    }

    /// Total roles across all quotas. Equals the player count.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.mafia + self.doctors + self.detectives + self.civilians
    }

    /// The role multiset, one token per player.
    fn tokens(&self) -> Vec<Role> {
        let mut roles = Vec::with_capacity(self.total());
        roles.extend(std::iter::repeat(Role::Mafia).take(self.mafia));
        roles.extend(std::iter::repeat(Role::Doctor).take(self.doctors));
        roles.extend(std::iter::repeat(Role::Detective).take(self.detectives));
        roles.extend(std::iter::repeat(Role::Civilian).take(self.civilians));
        roles
    }
}

/// Shuffle roles over `names` and build the roster.
///
/// Names keep their input order; only the roles move.
pub fn assign_roles(names: Vec<String>, rng: &mut GameRng) -> Result<Roster, ConfigError> {
    let quotas = RoleQuotas::for_player_count(names.len())?;

    let mut roles = quotas.tokens();
    rng.shuffle(&mut roles);

    let players = names
        .into_iter()
        .zip(roles)
        .enumerate()
        .map(|(i, (name, role))| Player::new(PlayerId::new(i as u8), name, role))
        .collect();

    debug!(
        mafia = quotas.mafia,
        civilians = quotas.civilians,
        seed = rng.seed(),
        "roles assigned"
    );
    Ok(Roster::new(players))
}
