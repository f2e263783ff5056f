//! Properties of every position reachable by legal play.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use tris_core::{GameError, InvalidMoveReason, Move, Outcome, Player, Position, score};

/// Every distinct position reachable from `start`, `start` included.
fn reachable(start: Position) -> HashSet<Position> {
    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some(position) = stack.pop() {
        if seen.insert(position) {
            stack.extend(position.children());
        }
    }
    seen
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable(Position::empty(Player::X)).len(), 5478);
}

#[test]
fn test_mark_counts_alternate() {
    for starter in Player::iter() {
        let other = starter.opponent();
        for position in reachable(Position::empty(starter)) {
            let board = position.board();
            let lead = board.count(starter) as isize - board.count(other) as isize;
            assert!(
                lead == 0 || lead == 1,
                "starter {starter} leads by {lead} in\n{position}"
            );
            assert_eq!(position.move_count(), board.filled());
            assert_eq!(
                position.move_count(),
                board.count(Player::X) + board.count(Player::O)
            );
        }
    }
}

#[test]
fn test_reachable_positions_validate() {
    for starter in Player::iter() {
        for position in reachable(Position::empty(starter)) {
            assert_eq!(position.validate(), Ok(()), "invalid:\n{position}");
        }
    }
}

#[test]
fn test_children_match_empty_cells() {
    for position in reachable(Position::empty(Player::X)) {
        let children = position.children();
        if position.is_terminal() {
            assert!(children.is_empty());
            continue;
        }
        assert_eq!(children.len(), position.legal_moves().len());
        assert_eq!(children.len(), 9 - position.move_count());
        for child in children {
            assert_eq!(child.move_count(), position.move_count() + 1);
            assert_eq!(child.to_move(), position.to_move().opponent());
        }
    }
}

#[test]
fn test_terminal_iff_not_ongoing() {
    for position in reachable(Position::empty(Player::X)) {
        assert_eq!(position.is_terminal(), position.outcome() != Outcome::Ongoing);
        if position.move_count() == 9 {
            assert!(position.is_terminal());
        }
    }
}

#[test]
fn test_terminal_scores_match_outcome() {
    for position in reachable(Position::empty(Player::X)) {
        match position.outcome() {
            Outcome::Win(Player::X) => assert_eq!(score(&position), 10),
            Outcome::Win(Player::O) => assert_eq!(score(&position), -10),
            Outcome::Draw => assert_eq!(score(&position), 0),
            Outcome::Ongoing => {}
        }
    }
}

#[test]
fn test_empty_board_is_ongoing() {
    for starter in Player::iter() {
        let position = Position::empty(starter);
        assert_eq!(position.outcome(), Outcome::Ongoing);
        assert!(!position.is_terminal());
    }
}

#[test]
fn test_occupied_cell_rejected_and_original_unchanged() {
    let original = Position::empty(Player::X).apply_move(1, 1).unwrap();
    let snapshot = original;

    let result = original.apply_move(1, 1);
    assert_eq!(
        result,
        Err(GameError::InvalidMove {
            mv: Move::new(1, 1),
            reason: InvalidMoveReason::Occupied,
        })
    );
    assert_eq!(original, snapshot);

    // The original is still usable after the failed call.
    let next = original.apply_move(0, 0).unwrap();
    assert_eq!(next.move_count(), 2);
    assert_eq!(original.move_count(), 1);
}

#[test]
fn test_error_messages() {
    let err = Position::empty(Player::X).apply_move(5, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid move at (5, 1): coordinates out of range"
    );
}
