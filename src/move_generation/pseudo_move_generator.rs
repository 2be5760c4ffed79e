//! Pseudo-legal move enumeration.
//!
//! Walks all 64 squares and dispatches every piece of the side to move to its
//! movement pattern. Nothing here checks king safety; the same enumeration,
//! run for the opponent on a simulated board, is how the legality filter
//! decides whether a square is attacked.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::{generate_pawn_moves, pawn_capture_squares};
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;
use crate::moves::move_descriptions::ChessMove;

/// One flag per square.
pub type SquareSet = [bool; 64];

pub fn generate_pseudo_moves(position: &BoardPosition) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(64);
    let side = position.side_to_move;

    for start in 0..64u8 {
        let Some((color, kind)) = position.piece_at(start) else {
            continue;
        };
        if color != side {
            continue;
        }

        match kind {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                generate_sliding_moves(position, start, color, kind, &mut out)
            }
            PieceKind::Knight => generate_knight_moves(position, start, color, &mut out),
            PieceKind::Pawn => generate_pawn_moves(position, start, color, &mut out),
            PieceKind::King => generate_king_moves(position, start, color, &mut out),
        }
    }

    out
}

/// Squares the side to move attacks: every pseudo-move target, plus the
/// diagonal squares in front of each pawn whether or not they are occupied.
/// A pawn push never counts as an attack.
pub fn attacked_squares(position: &BoardPosition) -> SquareSet {
    let mut attacked = [false; 64];
    let side = position.side_to_move;

    for mv in generate_pseudo_moves(position) {
        if is_pawn_push(position, &mv) {
            continue;
        }
        attacked[mv.target as usize] = true;
    }

    let own_pawn = square_value(side, PieceKind::Pawn);
    for start in 0..64u8 {
        if position.value_at(start) != own_pawn {
            continue;
        }
        for target in pawn_capture_squares(start, side).into_iter().flatten() {
            attacked[target as usize] = true;
        }
    }

    attacked
}

#[inline]
fn is_pawn_push(position: &BoardPosition, mv: &ChessMove) -> bool {
    piece_kind_of(position.value_at(mv.start)) == Some(PieceKind::Pawn)
        && (mv.start as i16 - mv.target as i16) % 8 == 0
}

/// Whether the side to move attacks `square`.
#[inline]
pub fn is_square_attacked(position: &BoardPosition, square: Square) -> bool {
    attacked_squares(position)[square as usize]
}
