//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by position loading, move
//! generation, move application and the game session. Every variant describes
//! a contract violation by the caller (bad FEN, a move that is not in the
//! legal list, a board without a king) rather than a condition to retry.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::EndReason;

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// FEN-like string had a malformed structure.
    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// Unexpected character in the piece placement field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// A square or coordinate move string could not be interpreted.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// The board has no king for the given color.
    #[error("board does not contain a {0:?} king")]
    MissingKing(Color),

    /// Tried to apply a move whose start square is empty.
    #[error("no piece on start square {0}")]
    NoPieceOnStartSquare(Square),

    /// Tried to apply a move with a piece that does not belong to the side to move.
    #[error("piece on square {square} does not belong to {side_to_move:?}")]
    WrongSideToMove { square: Square, side_to_move: Color },

    /// The move is not part of the most recently generated legal list.
    #[error("move {start}->{target} is not a legal move in this position")]
    MoveNotInLegalList { start: Square, target: Square },

    /// A move was submitted after the game ended.
    #[error("game is already over ({0:?})")]
    GameAlreadyOver(EndReason),
}

/// Result alias for rules-core operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
