//! The I/O seam between the engine and the outside world.
//!
//! The state machine never touches a terminal. It requests integer
//! choices through an [`InputPort`] and emits narration through an
//! [`OutputPort`]; both are owned by the calling application. Console
//! implementations live in [`console`], deterministic replay sources in
//! [`script`].

pub mod console;
pub mod script;

pub use console::{ConsoleInput, ConsoleOutput};
pub use script::{BufferedOutput, ScriptedInput};

/// Source of player choices.
///
/// `request_choice` blocks until the source produces an integer, and
/// returns `None` once the source is exhausted. Range and liveness
/// validation happen in the engine, which re-invokes the port until the
/// choice is acceptable.
pub trait InputPort {
    /// Ask for an integer choice, showing `prompt` to whoever answers.
    fn request_choice(&mut self, prompt: &str) -> Option<usize>;
}

/// Sink for narrative messages.
///
/// Fire-and-forget: announcements never feed back into decisions.
pub trait OutputPort {
    /// Emit one line of narration.
    fn announce(&mut self, message: &str);
}
