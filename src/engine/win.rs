//! Win-condition evaluation.

use crate::core::role::Faction;
use crate::core::state::GameState;

/// Check whether the game is over.
///
/// Returns the winning faction, or `None` while the game continues.
/// Terminal when no mafia remain (town wins) or when the living mafia
/// exactly equal the living town members (mafia wins). The equality
/// comparison, rather than ≥, is the rule this engine implements.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<Faction> {
    if state.living_mafia() == 0 {
        Some(Faction::Town)
    } else if state.living_mafia() == state.living_town() {
        Some(Faction::Mafia)
    } else {
        None
    }
}
