//! Inline yes/no confirmation over a reader/writer pair

use std::io::{BufRead, Write};

use formgate_core::{Confirmer, Decision, PromptSpec};
use tracing::warn;

/// Asks a yes/no question inline and reads one answer line
///
/// Only `y`/`yes` (case-insensitive) affirms; anything else, including an
/// empty line, EOF, and read failures, declines. Declining on broken I/O
/// means a dead terminal can never produce an unconfirmed submission.
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    /// Create a confirmer over the given reader/writer pair
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn ask(&mut self, prompt: &PromptSpec) -> Decision {
        let presented = write!(self.output, "{} [y/N] ", prompt.message)
            .and_then(|()| self.output.flush());
        if let Err(e) = presented {
            warn!("Failed to present confirmation prompt: {}", e);
            return Decision::Declined;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Decision::Declined,
            Ok(_) => parse_answer(&line),
            Err(e) => {
                warn!("Failed to read confirmation answer: {}", e);
                Decision::Declined
            }
        }
    }
}

/// Map an answer line to a decision
fn parse_answer(line: &str) -> Decision {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Decision::Affirmed,
        _ => Decision::Declined,
    }
}
