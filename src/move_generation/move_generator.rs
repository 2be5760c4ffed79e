use crate::errors::ChessResult;
use crate::game_state::board_position::BoardPosition;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Classification of a position together with the moves legal in it.
/// The move list is empty whenever the state is `GameState::End`.
pub type GeneratedMoves = (GameState, Vec<ChessMove>);

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &BoardPosition) -> ChessResult<GeneratedMoves>;
}
