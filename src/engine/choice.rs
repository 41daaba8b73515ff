//! Choice validation shared by every phase.

use crate::core::player::PlayerId;
use crate::core::role::Role;
use crate::core::roster::Roster;
use crate::error::GameError;
use crate::ports::{InputPort, OutputPort};

/// Ask the input port for a player index until it names a living player.
///
/// `role_filter` additionally restricts the choice to players holding
/// the given role. No phase currently passes it; it stays available on
/// the contract.
///
/// Invalid choices re-prompt and are never fatal. The only error is an
/// exhausted input port.
pub fn choose_player(
    roster: &Roster,
    input: &mut dyn InputPort,
    output: &mut dyn OutputPort,
    prompt: &str,
    role_filter: Option<Role>,
) -> Result<PlayerId, GameError> {
    loop {
        let Some(index) = input.request_choice(prompt) else {
            return Err(GameError::InputClosed);
        };

        match roster.get(index) {
            Some(player) if player.is_alive() => match role_filter {
                Some(role) if player.role() != role => {
                    output.announce(&format!("Error! Only a {} may be chosen here.", role));
                }
                _ => return Ok(player.id()),
            },
            _ => output.announce("Invalid choice. Please choose again."),
        }
    }
}
