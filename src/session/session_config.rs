//! Session configuration.
//!
//! Plain data assembled by the binary from command-line flags; tests build it
//! directly with struct update syntax over `SessionConfig::default()`.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;

/// Default pause before a computer move, in milliseconds.
pub const DEFAULT_CPU_DELAY_MS: u64 = 200;

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsComputer {
        human: Color,
    },
    ComputerVsComputer,
}

impl GameMode {
    pub fn is_computer_turn(self, side_to_move: Color) -> bool {
        match self {
            GameMode::PlayerVsPlayer => false,
            GameMode::PlayerVsComputer { human } => side_to_move != human,
            GameMode::ComputerVsComputer => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_fen: String,
    pub mode: GameMode,
    pub cpu_delay_ms: u64,
    pub seed: Option<u64>,
    // Stop unattended play after this many plies.
    pub max_plies: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            mode: GameMode::default(),
            cpu_delay_ms: DEFAULT_CPU_DELAY_MS,
            seed: None,
            max_plies: None,
        }
    }
}
