use serde::{Deserialize, Serialize};

use crate::types::FirstPlayerMode;

/// Per-session options, serializable so a front end can persist and
/// replay them.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SessionSettings {
    pub first_player: FirstPlayerMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
        }
    }
}
