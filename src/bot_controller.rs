use crate::board::{Board, BOARD_CELLS};
use crate::types::{GameError, Mark};
use crate::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Picks the optimal cell for the bot (O), assuming the human (X) answers
/// optimally. Exhaustive minimax over the full game tree: no pruning, no
/// caching. The tree is at most 9 plies deep, so a fresh search per call is
/// cheap and provably correct.
///
/// Ties are broken toward the lowest index: cells are scanned in ascending
/// order and a candidate only replaces the current best on a strictly
/// greater score. The caller's board is never modified.
pub fn best_move(board: &Board) -> Result<usize, GameError> {
    let mut scratch = *board;
    let mut best_score = i32::MIN;
    let mut best = None;

    for index in 0..BOARD_CELLS {
        if scratch.is_occupied(index) {
            continue;
        }
        scratch.set(index, Mark::O);
        let score = minimax(&mut scratch, 0, false);
        scratch.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best = Some(index);
        }
    }

    best.ok_or(GameError::NoLegalMove)
}

/// Terminal scores are depth-aware: a bot win at depth `d` is worth
/// `10 - d`, a human win `d - 10`, a full board 0. This makes the bot
/// prefer the fastest win and the slowest loss, which also fixes the
/// tie-break order among equally decisive moves.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    if check_win(board, Mark::O) {
        return WIN_SCORE - depth;
    }
    if check_win(board, Mark::X) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board.is_occupied(index) {
                continue;
            }
            board.set(index, Mark::O);
            best = best.max(minimax(board, depth + 1, false));
            board.set(index, Mark::Empty);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board.is_occupied(index) {
                continue;
            }
            board.set(index, Mark::X);
            best = best.min(minimax(board, depth + 1, true));
            board.set(index, Mark::Empty);
        }
        best
    }
}
