//! Tris core - tic-tac-toe state model and exact minimax solver.
//!
//! # Architecture
//!
//! - **State model**: [`Position`] is an immutable board snapshot plus the
//!   player to move. Every transition returns a new value.
//! - **Rules**: line checks and terminal classification ([`Outcome`]).
//! - **Search**: exhaustive minimax over the full game tree ([`score`],
//!   [`best_move`]).
//!
//! # Example
//!
//! ```
//! use tris_core::{best_move, Outcome, Player, Position};
//!
//! # fn example() -> Result<(), tris_core::GameError> {
//! let game = Position::empty(Player::X).apply_move(1, 1)?;
//! let reply = best_move(&game)?;
//! assert_eq!(reply.outcome(), Outcome::Ongoing);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Move, Outcome, Player};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - State model
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{check_winner, classify, is_draw, is_full};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, PositionInvariants,
    SingleWinnerInvariant, TurnParityInvariant,
};

// Crate-level exports - Search
pub use search::{
    DRAW_SCORE, MoveEvaluation, SearchStats, WIN_SCORE, best_move, evaluate_moves, score,
    score_with_stats,
};

// Crate-level exports - Errors
pub use error::{GameError, InvalidMoveReason, ParseBoardError};
