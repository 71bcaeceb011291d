//! Line-oriented prompts over an injected reader/writer pair.

use std::io::{self, BufRead, Write};

/// Prompt text followed by one line of operator input.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `question` (no newline), flush, and read one line.
    /// End of input before any byte is an `UnexpectedEof` error; a bare
    /// newline is an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for an answer",
            ));
        }
        Ok(line)
    }

    /// Writer the prompts go to; also used for the rest of the operator-facing text.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Format IDs are forwarded verbatim apart from surrounding whitespace.
pub fn normalize_format_id(raw: &str) -> String {
    raw.trim().to_string()
}

/// Only `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn is_yes(raw: &str) -> bool {
    raw.trim().to_lowercase() == "y"
}
