//! The interactive game loop.

use crate::input::InputClosed;
use crate::pacing::Console;
use crate::players::{EnginePlayer, HumanPlayer, Player};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tris_core::{Outcome, Player as Mark, Position};

/// Who places the first marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPlayer {
    /// The human starts as X from an empty board.
    Human,
    /// The engine starts as O from an empty board.
    Engine,
}

/// Results of a whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Final outcome of every completed game, in order.
    pub outcomes: Vec<Outcome>,
}

/// Drives games between a human (X) and the engine (O) over a console.
pub struct Shell<R, W> {
    console: Console<R, W>,
    human: HumanPlayer,
    engine: EnginePlayer,
    first: Option<FirstPlayer>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell. With `first` set, the "play first?" question is
    /// skipped.
    pub fn new(console: Console<R, W>, first: Option<FirstPlayer>) -> Self {
        Self {
            console,
            human: HumanPlayer::new("Human"),
            engine: EnginePlayer::new("Engine"),
            first,
        }
    }

    /// Consumes the shell, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays games until the user declines another one or input ends.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from the console. End of input is not an error:
    /// the session simply stops.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        match self.session(&mut summary) {
            Ok(()) => {}
            Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
                info!("Input closed, ending session");
            }
            Err(err) => return Err(err),
        }
        info!(games = summary.outcomes.len(), "Session finished");
        Ok(summary)
    }

    fn session(&mut self, summary: &mut SessionSummary) -> Result<()> {
        self.console.spell("Welcome to my game, human.\n")?;
        self.console.pause();

        loop {
            let outcome = self.play_game()?;
            info!(%outcome, "Game finished");
            summary.outcomes.push(outcome);

            let again = self.ask_yes_no("\nDo you want to try again? (type Y or N): ")?;
            if again {
                self.console.spell("\nLet me teach you another lesson then...\n")?;
            } else {
                self.console.spell("\nWise choice. Farewell.\n")?;
                return Ok(());
            }
        }
    }

    /// Asks until the answer is `Y` or `N` (any case).
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.console.ask(prompt)?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            warn!(%answer, "Unrecognised answer");
        }
    }

    fn choose_first(&mut self) -> Result<FirstPlayer> {
        if let Some(first) = self.first {
            return Ok(first);
        }
        self.console.spell("Do you think you can defeat me?\n")?;
        self.console.pause();
        let human_first = self.ask_yes_no("Do you want to play first? (type Y or N): ")?;
        Ok(if human_first {
            FirstPlayer::Human
        } else {
            FirstPlayer::Engine
        })
    }

    /// Plays a single game and returns its outcome.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Outcome> {
        let mut game = match self.choose_first()? {
            FirstPlayer::Human => {
                self.console.spell("Make your choice then.\n")?;
                self.console.spell("Your marker is an X. Where do you want to put it?\n")?;
                Position::empty(Mark::X)
            }
            FirstPlayer::Engine => {
                self.console.spell("Very well. Let me see....\n")?;
                self.engine.choose(&Position::empty(Mark::O), &mut self.console)?
            }
        };
        self.console.spell_board(&game)?;

        while !game.is_terminal() {
            game = self.human.choose(&game, &mut self.console)?;
            if game.outcome() == Outcome::Win(Mark::X) {
                warn!("Human won against the engine");
                self.console.spell(
                    "This is impossible. No but for real: if you see this text there's a bug somewhere!\n",
                )?;
            }

            self.console.spell("Your move:\n")?;
            self.console.spell_board(&game)?;

            if !game.is_terminal() {
                self.console.spell("\nNow watch how it's done:\n")?;
                self.console.pause();
                game = self.engine.choose(&game, &mut self.console)?;
                self.console.spell_board(&game)?;
            }

            if game.outcome() == Outcome::Win(Mark::O) {
                self.console.spell("\nI won. Obviously.\n")?;
            }
        }

        let outcome = game.outcome();
        if outcome == Outcome::Draw {
            self.console.spell("\nIt's a draw...\n")?;
            self.console.pause();
            self.console.spell("You sure are very lucky...\n")?;
        }
        Ok(outcome)
    }
}
