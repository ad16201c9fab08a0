use serde::Serialize;

use crate::board::Board;
use crate::types::{GameError, GameStatus, Mark, WinningLine};
use crate::win_detector::{check_win_with_line, evaluate_result};

/// One round of tic-tac-toe: the board plus whose turn it is and whether
/// the round is over. Owned by a single session, never shared.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    first_mark: Mark,
}

impl GameState {
    pub fn new(first_mark: Mark) -> Self {
        debug_assert!(first_mark != Mark::Empty);
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            first_mark,
        }
    }

    /// Places the current mark, re-evaluates the result, and hands the turn
    /// over while the round is still running.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        self.board.apply_move(index, self.current_mark)?;
        self.last_move = Some(index);

        self.status = evaluate_result(&self.board);
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Back to an empty board with the same opening side.
    pub fn reset(&mut self) {
        *self = Self::new(self.first_mark);
    }
}
