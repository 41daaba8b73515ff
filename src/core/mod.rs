//! Core vocabulary: roles, players, the roster, game state, RNG.
//!
//! These are the leaf building blocks. They hold no game-loop logic;
//! the `engine` module drives them.

pub mod player;
pub mod rng;
pub mod role;
pub mod roster;
pub mod state;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use role::{Faction, Role};
pub use roster::Roster;
pub use state::{GameState, Phase};
