//! Canonical chess-rule constants.
//!
//! Static literals shared by setup, generation and classification: the
//! standard starting FEN, the promotion order and the castle landing squares.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Order in which promotion moves are emitted.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
];

/// Half-move clock value above which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u16 = 99;

/// Matches against the latest snapshot that end the game as a repetition
/// (the third occurrence overall).
pub const REPETITION_MATCHES: usize = 2;

/// Fixed square the king lands on when castling.
#[inline]
pub const fn castle_landing_square(color: Color, side: CastleSide) -> Square {
    match (color, side) {
        (Color::Dark, CastleSide::QueenSide) => 2,
        (Color::Dark, CastleSide::KingSide) => 6,
        (Color::Light, CastleSide::QueenSide) => 58,
        (Color::Light, CastleSide::KingSide) => 62,
    }
}
