use crate::board::Board;
use crate::bot_controller::best_move;
use crate::game_state::GameState;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::SessionSettings;
use crate::types::{FirstPlayerMode, GameError, GameStatus, Mark, WinningLine};

/// A single-player session: the human plays X, the engine answers with O.
/// Everything is synchronous; any "thinking" delay belongs to the front
/// end, not to the session.
pub struct GameSession {
    state: GameState,
    settings: SessionSettings,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_seed(settings, SessionRng::from_random().seed())
    }

    /// Same session with a fixed seed, so `FirstPlayerMode::Random` rounds
    /// are reproducible.
    pub fn with_seed(settings: SessionSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let first_mark = match settings.first_player {
            FirstPlayerMode::Human => Mark::X,
            FirstPlayerMode::Bot => Mark::O,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        let mut session = Self {
            state: GameState::new(first_mark),
            settings,
            rng,
        };
        session.open_round();
        session
    }

    /// Applies the human's move, then lets the bot answer while the round
    /// is still running. Returns the status after both plies.
    pub fn play_human_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        self.state.place_mark(index)?;
        log!("[session:{}] human placed X at {}", self.rng.seed(), index);

        if self.state.status == GameStatus::InProgress {
            self.play_bot_turn()?;
        }

        let status = self.state.status;
        if status != GameStatus::InProgress {
            log!("[session:{}] round over: {:?}", self.rng.seed(), status);
        }

        Ok(status)
    }

    /// Starts a fresh round under the same settings. When the bot opens,
    /// its first move is played immediately.
    pub fn reset(&mut self) {
        self.state.reset();
        log!("[session:{}] round reset", self.rng.seed());
        self.open_round();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn open_round(&mut self) {
        if self.state.current_mark == Mark::O {
            // Cannot fail on an empty board; log instead of bubbling up.
            if let Err(e) = self.play_bot_turn() {
                log!("[session:{}] bot failed to open: {}", self.rng.seed(), e);
            }
        }
    }

    fn play_bot_turn(&mut self) -> Result<(), GameError> {
        let index = best_move(&self.state.board)?;
        self.state.place_mark(index)?;
        log!("[session:{}] bot placed O at {}", self.rng.seed(), index);
        Ok(())
    }
}
