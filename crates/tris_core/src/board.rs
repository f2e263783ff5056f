//! 3x3 board storage, rendering and parsing.

use crate::error::ParseBoardError;
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator line printed between rows.
const ROW_RULE: &str = "\n-----------\n";

/// Separator printed between cells of a row.
const CELL_SEP: &str = " | ";

/// 3x3 tic-tac-toe grid.
///
/// Boards are plain values: [`Board::with`] returns a modified copy and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a `[row][col]` grid.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `mv`, or `None` if out of range.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Returns a copy of this board with `mv` set to `cell`.
    ///
    /// `mv` must be in range; callers validate first.
    pub(crate) fn with(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }

    /// Checks if the cell at `mv` is in range and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns the grid as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.is_empty(mv))
            .collect()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Number of cells holding `player`'s marker.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, [a, b, c]) in self.cells.iter().enumerate() {
            write!(
                f,
                " {}{CELL_SEP}{}{CELL_SEP}{}",
                a.symbol(),
                b.symbol(),
                c.symbol()
            )?;
            if idx < 2 {
                f.write_str(ROW_RULE)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses compact notation such as `"XX_/OO_/___"`.
    ///
    /// `X` and `O` are markers; `_`, `.`, `-` and space are empty cells;
    /// `/`, `|` and line breaks are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(9);
        for (offset, ch) in s.char_indices() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '_' | '.' | '-' | ' ' => Cell::Empty,
                '/' | '|' | '\n' | '\r' => continue,
                other => return Err(ParseBoardError::UnexpectedChar { ch: other, offset }),
            };
            parsed.push(cell);
        }

        if parsed.len() != 9 {
            return Err(ParseBoardError::WrongCellCount {
                found: parsed.len(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (idx, cell) in parsed.into_iter().enumerate() {
            cells[idx / 3][idx % 3] = cell;
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_rendering() {
        let rendered = Board::new().to_string();
        assert_eq!(
            rendered,
            "   |   |  \n-----------\n   |   |  \n-----------\n   |   |  "
        );
    }

    #[test]
    fn test_rendering_matches_transcript() {
        let board: Board = "XO_/_X_/__O".parse().unwrap();
        assert_eq!(
            board.to_string(),
            " X | O |  \n-----------\n   | X |  \n-----------\n   |   | O"
        );
    }

    #[test]
    fn test_parse_accepts_separators_and_case() {
        let a: Board = "xx_|oo_|___".parse().unwrap();
        let b: Board = "XX.\nOO.\n...".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count(Player::X), 2);
        assert_eq!(a.count(Player::O), 2);
        assert_eq!(a.filled(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { found: 2 })
        );
        assert_eq!(
            "XXZ/___/___".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar { ch: 'Z', offset: 2 })
        );
    }

    #[test]
    fn test_with_returns_copy() {
        let board = Board::new();
        let next = board.with(Move::new(1, 1), Cell::Occupied(Player::X));
        assert!(board.is_empty(Move::new(1, 1)));
        assert!(!next.is_empty(Move::new(1, 1)));
    }

    #[test]
    fn test_out_of_range_get() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert!(!board.is_empty(Move::new(0, 7)));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X_O/_X_/OOX".parse().unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 2)]
        );
    }
}
