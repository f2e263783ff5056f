//! Typewriter-style output with configurable delays.

use crate::config::ShellConfig;
use crate::input::TokenReader;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tris_core::Position;

/// Delays used when spelling text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    /// Delay after each character of ordinary text.
    pub char_delay: Duration,
    /// Delay after each character of a rendered board.
    pub board_char_delay: Duration,
    /// Length of a dramatic pause.
    pub pause: Duration,
}

impl Pacing {
    /// No delays at all.
    pub fn none() -> Self {
        Self::default()
    }
}

impl From<&ShellConfig> for Pacing {
    fn from(config: &ShellConfig) -> Self {
        if !*config.pacing() {
            return Self::none();
        }
        Self {
            char_delay: Duration::from_millis(*config.char_delay_ms()),
            board_char_delay: Duration::from_millis(*config.board_char_delay_ms()),
            pause: Duration::from_millis(*config.pause_ms()),
        }
    }
}

/// The shell's terminal: token input plus paced output.
#[derive(Debug)]
pub struct Console<R, W> {
    input: TokenReader<R>,
    output: W,
    pacing: Pacing,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, pacing: Pacing) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            pacing,
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn spell_with(&mut self, text: &str, delay: Duration) -> std::io::Result<()> {
        if delay.is_zero() {
            self.output.write_all(text.as_bytes())?;
            return self.output.flush();
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.output.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Writes `text` one character at a time.
    pub fn spell(&mut self, text: &str) -> std::io::Result<()> {
        self.spell_with(text, self.pacing.char_delay)
    }

    /// Writes a board followed by a newline, at board speed.
    pub fn spell_board(&mut self, position: &Position) -> std::io::Result<()> {
        self.spell_with(&format!("{position}\n"), self.pacing.board_char_delay)
    }

    /// Sleeps for the configured pause.
    pub fn pause(&self) {
        if !self.pacing.pause.is_zero() {
            thread::sleep(self.pacing.pause);
        }
    }

    /// Spells `prompt` and returns the next input token.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.spell(prompt)?;
        self.input.next_token()
    }
}
