//! Deterministic ports for replay and testing.

use std::collections::VecDeque;

use super::{InputPort, OutputPort};

/// Input port that replays a fixed sequence of choices.
///
/// Returns `None` once the script runs out, so a game that asks for
/// more choices than the script holds ends with
/// `GameError::InputClosed` instead of hanging.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    choices: VecDeque<usize>,
}

impl ScriptedInput {
    /// Create a script from choices in play order.
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl InputPort for ScriptedInput {
    fn request_choice(&mut self, _prompt: &str) -> Option<usize> {
        self.choices.pop_front()
    }
}

/// Output port that buffers every announcement.
#[derive(Clone, Debug, Default)]
pub struct BufferedOutput {
    messages: Vec<String>,
}

impl BufferedOutput {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether any announcement contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl OutputPort for BufferedOutput {
    fn announce(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
