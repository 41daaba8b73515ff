//! # mafia-engine
//!
//! A single-session, turn-based social-deduction game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: role assignment, the night/day state machine, vote
//!    tallying, and win evaluation carry all the logic. Console reading
//!    and printing are glue behind injected ports.
//!
//! 2. **Deterministic**: the only randomness is the role shuffle, drawn
//!    from a seed-addressable RNG. The same seed replays the same game.
//!
//! 3. **Closed role set**: every phase matches on `Role` exhaustively,
//!    so a new role will not compile until each decision point handles
//!    it.
//!
//! ## Architecture
//!
//! - Role assignment builds the roster once; the game loop alternates
//!   night and day phases, checking the win condition before each, and
//!   stops when one faction is eliminated.
//!
//! - The engine blocks on an `InputPort` for every choice and narrates
//!   through an `OutputPort`; neither feeds back into game state. A
//!   scripted input and a buffering output make whole games replayable
//!   in tests.
//!
//! ## Modules
//!
//! - `core`: roles, players, the roster, game state, RNG
//! - `engine`: assignment, choice validation, voting, win evaluation,
//!   the game loop
//! - `ports`: input/output seams - console, scripted, buffered

pub mod core;
pub mod engine;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use crate::core::{Faction, GameRng, GameState, Phase, Player, PlayerId, Role, Roster};

pub use crate::engine::{assign_roles, choose_player, is_terminal, run_vote};
pub use crate::engine::{Game, GameBuilder, RoleQuotas};

pub use crate::error::{ConfigError, GameError};

pub use crate::ports::{
    BufferedOutput, ConsoleInput, ConsoleOutput, InputPort, OutputPort, ScriptedInput,
};
