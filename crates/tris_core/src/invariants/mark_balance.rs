//! Mark balance invariant: players alternate, so counts differ by at most one.

use super::Invariant;
use crate::{Player, Position};

/// Invariant: the numbers of X and O markers differ by at most one.
///
/// Either player may start, so the sign of the difference is not fixed.
pub struct MarkBalanceInvariant;

impl Invariant<Position> for MarkBalanceInvariant {
    fn holds(position: &Position) -> bool {
        let board = position.board();
        board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
    }

    fn description() -> &'static str {
        "Marker counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&Position::empty(Player::X)));
    }

    #[test]
    fn test_engine_first_holds() {
        let position = Position::empty(Player::O).apply_move(1, 1).unwrap();
        assert!(MarkBalanceInvariant::holds(&position));
    }

    #[test]
    fn test_double_move_violates() {
        let board = "XX_/___/___".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&Position::from_board(
            board,
            Player::O
        )));
    }
}
