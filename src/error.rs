//! Error types.
//!
//! The engine fails fast on an impossible configuration and treats an
//! exhausted input source as the one fatal runtime condition. Every
//! other bad input is recoverable by re-prompting.

use thiserror::Error;

/// The player count cannot support the fixed role quotas.
///
/// Raised before any game state is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{player_count} players cannot seat {mafia} mafia, 1 doctor, and 1 detective")]
pub struct ConfigError {
    /// Number of names supplied.
    pub player_count: usize,
    /// Mafia quota computed for that count.
    pub mafia: usize,
}

/// Errors that can end a game run early.
#[derive(Debug, Error)]
pub enum GameError {
    /// The cast could not be assigned roles.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input port ran out before the game finished.
    #[error("input closed before the game finished")]
    InputClosed,
}
