mod board;
mod bot_controller;
mod game_state;
pub mod logger;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BOARD_CELLS, WIN_PATTERNS};
pub use bot_controller::best_move;
pub use game_state::GameState;
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use types::{FirstPlayerMode, GameError, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_result};
