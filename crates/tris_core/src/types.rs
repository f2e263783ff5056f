//! Core domain types for tic-tac-toe.

use crate::search::{DRAW_SCORE, WIN_SCORE};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// Player X (the first-moving marker).
    X,
    /// Player O (the second-moving marker).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed value of a win for this player: `+10` for X, `-10` for O.
    pub fn win_score(self) -> i32 {
        match self {
            Player::X => WIN_SCORE,
            Player::O => -WIN_SCORE,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's marker.
    Occupied(Player),
}

impl Cell {
    /// Transcript symbol for this cell: a blank space, `X` or `O`.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A 0-based (row, column) coordinate on the board.
///
/// Construction is unchecked; [`crate::Position::apply_move`] rejects
/// coordinates outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Move {
    /// All 9 cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates are in `0..3`.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// A player owns a complete line.
    Win(Player),
    /// The board is full and no line is complete.
    Draw,
}

impl Outcome {
    /// Signed terminal value: `+10` X wins, `-10` O wins, `0` draw.
    ///
    /// Returns `None` for [`Outcome::Ongoing`].
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Win(player) => Some(player.win_score()),
            Outcome::Draw => Some(DRAW_SCORE),
        }
    }

    /// Returns true unless the game is still ongoing.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
