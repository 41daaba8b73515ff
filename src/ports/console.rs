//! Console ports over stdin/stdout.

use std::io::{self, BufRead, Write};

use super::{InputPort, OutputPort};

/// Input port reading integer choices from stdin.
///
/// The prompt is written to stdout without a trailing newline, matching
/// the narration stream. Lines that do not parse as an integer re-issue
/// the prompt; a closed stdin yields `None`.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    /// Create a console input port.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputPort for ConsoleInput {
    fn request_choice(&mut self, prompt: &str) -> Option<usize> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{prompt}");
            let _ = io::stdout().flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    if let Ok(choice) = line.trim().parse::<usize>() {
                        return Some(choice);
                    }
                }
            }
        }
    }
}

/// Output port printing narration to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a console output port.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OutputPort for ConsoleOutput {
    fn announce(&mut self, message: &str) {
        println!("{message}");
    }
}
