//! Error types for the state model and the search engine.

use crate::types::Move;
use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveReason {
    /// Row or column outside `0..3`.
    #[display("coordinates out of range")]
    OutOfRange,
    /// The target cell already holds a marker.
    #[display("cell is already occupied")]
    Occupied,
}

/// Errors surfaced by [`crate::Position`] and the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Target cell occupied or coordinates out of range. Recoverable: the
    /// caller should ask again.
    #[display("Invalid move at {mv}: {reason}")]
    InvalidMove {
        /// The rejected move.
        mv: Move,
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },

    /// A best move was requested on a terminal position.
    #[display("No moves available: position is terminal")]
    NoMovesAvailable,
}

/// Errors from parsing a board in compact notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a marker, an empty cell nor a separator.
    #[display("Unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset in the input.
        offset: usize,
    },

    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells read.
        found: usize,
    },
}
