//! Game logic: role assignment, choice validation, vote tallying, win
//! evaluation, and the phase state machine that drives them.

pub mod assign;
pub mod choice;
pub mod game;
pub mod vote;
pub mod win;

pub use assign::{assign_roles, RoleQuotas};
pub use choice::choose_player;
pub use game::{Game, GameBuilder};
pub use vote::run_vote;
pub use win::is_terminal;
