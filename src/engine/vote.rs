//! Day-phase vote tallying.

use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::roster::Roster;
use crate::engine::choice::choose_player;
use crate::error::GameError;
use crate::ports::{InputPort, OutputPort};

/// Collect one vote from every living player and return the plurality
/// target.
///
/// Votes are cast in roster order; any living player is a legal target,
/// including the voter themselves. Ties resolve to the lowest index.
pub fn run_vote(
    roster: &Roster,
    input: &mut dyn InputPort,
    output: &mut dyn OutputPort,
) -> Result<PlayerId, GameError> {
    // One accumulator per roster slot, inline for typical table sizes.
    let mut tally: SmallVec<[u32; 8]> = SmallVec::from_elem(0, roster.len());

    output.announce("The vote begins. Players vote for a suspect:");
    for voter in roster.living() {
        let prompt = format!("{} votes for: ", voter.name());
        let target = choose_player(roster, input, output, &prompt, None)?;
        tally[target.index()] += 1;
    }

    // Strictly-greater comparison keeps the first index on a tie.
    let mut winner = 0;
    for (index, &votes) in tally.iter().enumerate() {
        if votes > tally[winner] {
            winner = index;
        }
    }
    Ok(PlayerId::new(winner as u8))
}
