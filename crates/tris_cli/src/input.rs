//! Whitespace-separated token input, one line at a time.

use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{instrument, trace};

/// The input stream ended while the shell was waiting for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Input closed")]
pub struct InputClosed;

/// Reads whitespace-separated tokens, buffering the rest of each line.
///
/// A line such as `2 3` answers two consecutive prompts.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading more lines as needed.
    ///
    /// # Errors
    ///
    /// Returns [`InputClosed`] at end of input, or the underlying I/O error.
    #[instrument(skip(self))]
    pub fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "Read token");
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputClosed.into());
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
