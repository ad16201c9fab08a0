use serde::{Deserialize, Serialize};

use crate::types::{GameError, Mark};

pub const BOARD_CELLS: usize = 9;

/// The 8 three-in-a-row index triples: 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid stored row-major, indices 0-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    /// Precondition: `index < BOARD_CELLS`.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.cells[index] != Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    /// Validates before mutating: an occupied or out-of-range cell is
    /// rejected and the board is left untouched.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if index >= BOARD_CELLS || self.cells[index] != Mark::Empty {
            return Err(GameError::InvalidMove(index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Unchecked write, used by the search for place/undo on its scratch copy.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), BOARD_CELLS);
        for index in 0..BOARD_CELLS {
            assert!(!board.is_occupied(index));
        }
    }

    #[test]
    fn test_apply_move_fills_cell() {
        let mut board = Board::new();
        board.apply_move(4, Mark::X).unwrap();

        assert!(board.is_occupied(4));
        assert_eq!(board.cells()[4], Mark::X);
        assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();

        assert_eq!(board.apply_move(0, Mark::O), Err(GameError::InvalidMove(0)));
        assert_eq!(board.cells()[0], Mark::X);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range_index() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Mark::X), Err(GameError::InvalidMove(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
