//! Mailbox board position.
//!
//! `BoardPosition` is the single mutable model of a game in progress: the 64
//! square values, side to move, castling flags, en passant file, repetition
//! snapshots and clocks. It is only mutated through
//! `move_generation::legal_move_apply::apply_move`; exploratory checks work on
//! clones.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Full-board snapshot stored in the repetition log.
pub type BoardSnapshot = [SquareValue; 64];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPosition {
    pub squares: BoardSnapshot,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,

    // File of the pawn that just double-stepped; valid for the next move only.
    pub en_passant_file: Option<u8>,

    // Snapshots after every non-pawn move, cleared by pawn moves.
    pub repetition_log: Vec<BoardSnapshot>,

    pub half_move_clock: u16,
    pub fullmove_number: u16,
}

impl Default for BoardPosition {
    fn default() -> Self {
        Self {
            squares: [EMPTY; 64],
            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_file: None,
            repetition_log: Vec::new(),
            half_move_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl BoardPosition {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn value_at(&self, square: Square) -> SquareValue {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square as usize] == EMPTY
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        decode_square_value(self.value_at(square))
    }

    /// First square holding the king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = square_value(color, PieceKind::King);
        self.squares
            .iter()
            .position(|&value| value == king)
            .map(|index| index as Square)
    }

    #[inline]
    pub fn require_king_square(&self, color: Color) -> ChessResult<Square> {
        self.king_square(color).ok_or(ChessErrors::MissingKing(color))
    }
}
