//! Move-selection policy abstraction.
//!
//! Computer players pick from the legal list the session just generated, so
//! an engine never has to know the rules itself.

use crate::errors::ChessResult;
use crate::game_state::board_position::BoardPosition;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `legal_moves` is the list most recently generated for `position`;
    /// the returned move must be one of them.
    fn choose_move(
        &mut self,
        position: &BoardPosition,
        legal_moves: &[ChessMove],
    ) -> ChessResult<EngineOutput>;
}
