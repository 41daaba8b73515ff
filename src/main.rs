//! Console runner: one game with the reference cast.
//!
//! Narration goes to stdout through the console ports; tracing goes to
//! stderr so the two streams stay separate. Exits normally once the
//! winner is announced, whichever faction won.

use anyhow::Result;
use mafia_engine::engine::GameBuilder;
use mafia_engine::ports::{ConsoleInput, ConsoleOutput};
use tracing_subscriber::EnvFilter;

/// The reference six-player cast.
const CAST: [&str; 6] = ["Aizha", "Yanka", "Sashka", "Ksyu", "Zhenka", "Vika"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut game = GameBuilder::new(CAST).build()?;
    let mut input = ConsoleInput::new();
    let mut output = ConsoleOutput::new();
    game.play(&mut input, &mut output)?;
    Ok(())
}
