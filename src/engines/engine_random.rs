//! Random-move engine.
//!
//! Selects uniformly from the legal moves it is handed. Seeding makes a
//! computer-vs-computer game reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::board_position::BoardPosition;
use crate::moves::move_descriptions::ChessMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(
        &mut self,
        _position: &BoardPosition,
        legal_moves: &[ChessMove],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
