//! Immutable game position: a board plus the player to move.
//!
//! Every transition builds a new [`Position`]. Earlier positions held by a
//! caller (for display or undo) are never invalidated by later moves.

use crate::board::Board;
use crate::error::{GameError, InvalidMoveReason};
use crate::invariants::{InvariantSet, InvariantViolation, PositionInvariants};
use crate::rules::classify;
use crate::types::{Cell, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot of the 3x3 grid and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    board: Board,
    to_move: Player,
}

impl Position {
    /// Creates the canonical empty board with `starting_player` to move.
    #[instrument]
    pub fn empty(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: starting_player,
        }
    }

    /// Builds a position from an arbitrary board without validation.
    ///
    /// Use [`Position::validate`] to check that the result could arise from
    /// legal play.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Places the mover's marker at (`row`, `col`) and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the coordinates are outside
    /// `0..3` or the cell is occupied. `self` is never modified.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<Self, GameError> {
        let mv = Move::new(row, col);
        if !mv.in_bounds() {
            debug!(%mv, "Rejected move outside the board");
            return Err(GameError::InvalidMove {
                mv,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        if !self.board.is_empty(mv) {
            debug!(%mv, "Rejected move on occupied cell");
            return Err(GameError::InvalidMove {
                mv,
                reason: InvalidMoveReason::Occupied,
            });
        }
        Ok(self.play(mv))
    }

    /// Applies an already-validated move.
    fn play(&self, mv: Move) -> Self {
        Self {
            board: self.board.with(mv, Cell::Occupied(self.to_move)),
            to_move: self.to_move.opponent(),
        }
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.empty_cells()
    }

    /// Successor positions in row-major move order.
    ///
    /// Empty when the position is terminal.
    pub fn children(&self) -> Vec<Self> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .map(|mv| self.play(mv))
            .collect()
    }

    /// Successors paired with the move that produced them.
    pub(crate) fn moves_and_children(&self) -> Vec<(Move, Self)> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .map(|mv| (mv, self.play(mv)))
            .collect()
    }

    /// Classifies the position.
    pub fn outcome(&self) -> Outcome {
        classify(&self.board)
    }

    /// True iff the outcome is not [`Outcome::Ongoing`].
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Number of markers on the board (the depth from the empty board).
    pub fn move_count(&self) -> usize {
        self.board.filled()
    }

    /// Checks the position against the invariants of legal play.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        PositionInvariants::check_all(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
