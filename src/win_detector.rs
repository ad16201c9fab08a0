use crate::board::{Board, WIN_PATTERNS};
use crate::types::{GameStatus, Mark, WinningLine};

pub fn check_win(board: &Board, mark: Mark) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|&index| board.cells()[index] == mark))
}

/// Like `check_win` for both marks at once, additionally reporting which
/// cells complete the line.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for pattern in WIN_PATTERNS {
        let mark = board.cells()[pattern[0]];
        if mark == Mark::Empty {
            continue;
        }
        if pattern.iter().all(|&index| board.cells()[index] == mark) {
            return Some(WinningLine::new(mark, pattern));
        }
    }
    None
}

pub fn evaluate_result(board: &Board) -> GameStatus {
    let x_won = check_win(board, Mark::X);
    let o_won = check_win(board, Mark::O);
    // Both marks holding a line at once cannot happen under alternating play.
    debug_assert!(!(x_won && o_won));

    if o_won {
        GameStatus::OWon
    } else if x_won {
        GameStatus::XWon
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_pattern(pattern: [usize; 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for index in pattern {
            board.apply_move(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_each_pattern_wins_for_x() {
        for pattern in WIN_PATTERNS {
            let board = board_with_pattern(pattern, Mark::X);
            assert!(check_win(&board, Mark::X), "pattern {:?}", pattern);
            assert!(!check_win(&board, Mark::O), "pattern {:?}", pattern);
            assert_eq!(evaluate_result(&board), GameStatus::XWon);
        }
    }

    #[test]
    fn test_each_pattern_wins_for_o() {
        for pattern in WIN_PATTERNS {
            let board = board_with_pattern(pattern, Mark::O);
            assert!(check_win(&board, Mark::O), "pattern {:?}", pattern);
            assert_eq!(evaluate_result(&board), GameStatus::OWon);
        }
    }

    #[test]
    fn test_check_win_with_line_reports_cells() {
        let board = board_with_pattern([2, 5, 8], Mark::O);
        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [2, 5, 8]);
    }

    #[test]
    fn test_check_win_with_line_none_without_winner() {
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);

        assert_eq!(evaluate_result(&board), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_is_in_progress() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(4, Mark::O).unwrap();

        assert_eq!(evaluate_result(&board), GameStatus::InProgress);
    }
}
