//! Single winner invariant: play stops at the first complete line.

use super::Invariant;
use crate::board::Board;
use crate::types::{Cell, Move};
use crate::{Player, Position};

/// Every line on the board, rows then columns then diagonals.
fn lines() -> impl Iterator<Item = [Move; 3]> {
    let rows = (0..3).map(|r| [Move::new(r, 0), Move::new(r, 1), Move::new(r, 2)]);
    let cols = (0..3).map(|c| [Move::new(0, c), Move::new(1, c), Move::new(2, c)]);
    let diagonals = [
        [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
        [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)],
    ];
    rows.chain(cols).chain(diagonals)
}

fn owns_line(board: &Board, player: Player) -> bool {
    lines().any(|line| {
        line.iter()
            .all(|&mv| board.get(mv) == Some(Cell::Occupied(player)))
    })
}

/// Invariant: at most one player owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Position> for SingleWinnerInvariant {
    fn holds(position: &Position) -> bool {
        let board = position.board();
        !(owns_line(board, Player::X) && owns_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}
