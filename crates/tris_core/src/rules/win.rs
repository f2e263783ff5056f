//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Move, Player};

/// Main diagonal, top-left to bottom-right.
const MAIN_DIAGONAL: [Move; 3] = [
    Move { row: 0, col: 0 },
    Move { row: 1, col: 1 },
    Move { row: 2, col: 2 },
];

/// Anti-diagonal, bottom-left to top-right.
const ANTI_DIAGONAL: [Move; 3] = [
    Move { row: 2, col: 0 },
    Move { row: 1, col: 1 },
    Move { row: 0, col: 2 },
];

/// Returns the player owning all three cells of `line`, if any.
fn line_owner(board: &Board, line: [Move; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|mv| board.get(mv).unwrap_or(Cell::Empty));
    match a {
        Cell::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Rows and columns are scanned pairwise (row `i`, then column `i`) and the
/// scan stops at the first complete line. The two diagonals are checked
/// afterwards and a complete diagonal replaces the row/column result. Every
/// row and column crosses both diagonals, so a diagonal and a row/column can
/// never be owned by different players; the order only decides between two
/// parallel lines on hand-built boards.
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut winner = None;

    for i in 0..3 {
        let row = [Move::new(i, 0), Move::new(i, 1), Move::new(i, 2)];
        let col = [Move::new(0, i), Move::new(1, i), Move::new(2, i)];
        if let Some(player) = line_owner(board, row).or_else(|| line_owner(board, col)) {
            winner = Some(player);
            break;
        }
    }

    if let Some(player) =
        line_owner(board, MAIN_DIAGONAL).or_else(|| line_owner(board, ANTI_DIAGONAL))
    {
        winner = Some(player);
    }

    winner
}
