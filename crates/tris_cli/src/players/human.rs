//! Human player answering row and column prompts.

use super::Player;
use crate::pacing::Console;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use tris_core::{GameError, InvalidMoveReason, Position};

/// Human player entering 1-based coordinates on the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Asks for one 1-based coordinate and converts it to 0-based.
///
/// Returns `None` (after telling the user) for anything that is not a
/// number from 1 to 3.
fn ask_coordinate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<usize>> {
    let answer = console.ask(prompt)?;
    match answer.parse::<usize>() {
        Ok(n @ 1..=3) => Ok(Some(n - 1)),
        _ => {
            debug!(%answer, "Rejected coordinate");
            console.spell("Please type a number from 1 to 3.\n")?;
            Ok(None)
        }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose(&mut self, position: &Position, console: &mut Console<R, W>) -> Result<Position> {
        loop {
            let Some(row) = ask_coordinate(console, "\nInsert row(1-3): ")? else {
                continue;
            };
            let Some(col) = ask_coordinate(console, "\nInsert column(1-3): ")? else {
                continue;
            };

            match position.apply_move(row, col) {
                Ok(next) => return Ok(next),
                Err(GameError::InvalidMove {
                    reason: InvalidMoveReason::Occupied,
                    ..
                }) => {
                    console.spell("I cannot allow that, I'm sorry. Try again.\n")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputClosed;
    use crate::pacing::Pacing;
    use std::io::Cursor;
    use tris_core::{Cell, Move, Player as Mark};

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new(), Pacing::none())
    }

    #[test]
    fn test_converts_to_zero_based() {
        let mut console = console("1 3\n");
        let mut human = HumanPlayer::new("Human");
        let next = human
            .choose(&Position::empty(Mark::X), &mut console)
            .unwrap();
        assert_eq!(
            next.board().get(Move::new(0, 2)),
            Some(Cell::Occupied(Mark::X))
        );
    }

    #[test]
    fn test_reprompts_on_occupied_and_out_of_range() {
        let position = Position::empty(Mark::X).apply_move(1, 1).unwrap();
        let mut console = console("2 2\n4\nabc\n3 1\n");
        let mut human = HumanPlayer::new("Human");
        let next = human.choose(&position, &mut console).unwrap();
        assert_eq!(
            next.board().get(Move::new(2, 0)),
            Some(Cell::Occupied(Mark::O))
        );

        let transcript = String::from_utf8(console.into_output()).unwrap();
        assert!(transcript.contains("I cannot allow that, I'm sorry. Try again.\n"));
        assert_eq!(
            transcript.matches("Please type a number from 1 to 3.").count(),
            2
        );
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("2\n");
        let mut human = HumanPlayer::new("Human");
        let err = human
            .choose(&Position::empty(Mark::X), &mut console)
            .unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }
}
