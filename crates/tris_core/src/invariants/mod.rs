//! First-class invariants for tic-tac-toe positions.
//!
//! Invariants are logical properties that every position reached by legal
//! play satisfies. They are checked by [`crate::Position::validate`] and can
//! be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so sets compose by listing
/// their members.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Pushes a violation for `I` if it fails on `state`.
fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod mark_balance;
pub mod single_winner;
pub mod turn_parity;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_parity::TurnParityInvariant;

/// All position invariants as a composable set.
pub type PositionInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    SingleWinnerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn position(board: &str, to_move: Player) -> Position {
        Position::from_board(board.parse().unwrap(), to_move)
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(PositionInvariants::check_all(&Position::empty(Player::X)).is_ok());
        assert!(PositionInvariants::check_all(&Position::empty(Player::O)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Position::empty(Player::X)
            .apply_move(0, 0)
            .and_then(|p| p.apply_move(1, 1))
            .and_then(|p| p.apply_move(0, 2))
            .unwrap();
        assert!(PositionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Six X against three O, X to move again, and both players own a row.
        let corrupt = position("XXX/OOO/XXX", Player::X);
        let violations = PositionInvariants::check_all(&corrupt).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Counting = (MarkBalanceInvariant, TurnParityInvariant);
        assert!(Counting::check_all(&position("X__/___/___", Player::O)).is_ok());
        assert!(Counting::check_all(&position("X__/___/___", Player::X)).is_err());
    }
}
