//! Turn parity invariant: the player behind on markers is the one to move.

use super::Invariant;
use crate::{Player, Position};
use std::cmp::Ordering;

/// Invariant: if the marker counts differ, the player with fewer markers
/// is to move.
///
/// With equal counts either player may be to move, since the starting
/// player is not recorded.
pub struct TurnParityInvariant;

impl Invariant<Position> for TurnParityInvariant {
    fn holds(position: &Position) -> bool {
        let board = position.board();
        match board.count(Player::X).cmp(&board.count(Player::O)) {
            Ordering::Greater => position.to_move() == Player::O,
            Ordering::Less => position.to_move() == Player::X,
            Ordering::Equal => true,
        }
    }

    fn description() -> &'static str {
        "Player with fewer markers is to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_each_move_holds() {
        let first = Position::empty(Player::X).apply_move(0, 0).unwrap();
        assert!(TurnParityInvariant::holds(&first));
        let second = first.apply_move(2, 2).unwrap();
        assert!(TurnParityInvariant::holds(&second));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let board = "O__/___/___".parse().unwrap();
        assert!(!TurnParityInvariant::holds(&Position::from_board(
            board,
            Player::O
        )));
    }
}
