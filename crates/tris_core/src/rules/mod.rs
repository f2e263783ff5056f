//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`]. Rules are kept apart from board storage so
//! that the state model, the search engine and the invariants share one
//! definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::board::Board;
use crate::types::Outcome;

/// Classifies a board as ongoing, won or drawn.
pub fn classify(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
