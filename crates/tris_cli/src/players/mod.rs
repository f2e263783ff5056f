//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::pacing::Console;
use anyhow::Result;
use tris_core::Position;

/// Something that can take a turn.
pub trait Player<R, W> {
    /// Chooses a move from `position` and returns the resulting position.
    ///
    /// The console is available for prompts and commentary.
    fn choose(&mut self, position: &Position, console: &mut Console<R, W>) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<String>, Vec<u8>>;

    fn name_of<P: Player<Cursor<String>, Vec<u8>>>(player: &P) -> &str {
        player.name()
    }

    #[test]
    fn test_names() {
        assert_eq!(name_of(&HumanPlayer::new("Ada")), "Ada");
        assert_eq!(name_of(&EnginePlayer::new("Engine")), "Engine");
    }

    #[test]
    fn test_engine_replies_through_trait() {
        let mut console: TestConsole = Console::new(
            Cursor::new(String::new()),
            Vec::new(),
            crate::pacing::Pacing::none(),
        );
        let mut engine = EnginePlayer::new("Engine");
        let opening = engine
            .choose(&Position::empty(tris_core::Player::O), &mut console)
            .unwrap();
        assert_eq!(opening.move_count(), 1);
        assert!(console.into_output().is_empty());
    }
}
