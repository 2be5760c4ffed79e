//! Move application.
//!
//! `apply_move` is the only routine that mutates a `BoardPosition`. The
//! derived-state updates run in a fixed order: the half-move clock and
//! castling rights read the board and side to move as they were before the
//! relevant write, so the side to move is flipped last.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;
use crate::moves::geometry::file_of;
use crate::moves::move_descriptions::ChessMove;

pub fn apply_move(position: &mut BoardPosition, mv: &ChessMove) -> ChessResult<()> {
    let side = position.side_to_move;
    let moving_value = position.value_at(mv.start);
    let (moving_color, moving_kind) =
        decode_square_value(moving_value).ok_or(ChessErrors::NoPieceOnStartSquare(mv.start))?;
    if moving_color != side {
        return Err(ChessErrors::WrongSideToMove {
            square: mv.start,
            side_to_move: side,
        });
    }

    update_half_move_clock(position, mv, moving_kind);
    update_en_passant(position, mv);
    move_pieces(position, mv, moving_value);
    move_castling_rook(position, mv, side);
    update_castling_rights(position, mv, side, moving_kind)?;
    update_repetition_log(position, moving_kind);

    if side == Color::Dark {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    position.side_to_move = side.opposite();

    Ok(())
}

/// Must run before the target square is overwritten.
fn update_half_move_clock(position: &mut BoardPosition, mv: &ChessMove, moving_kind: PieceKind) {
    let is_capture = !position.is_empty_square(mv.target);
    if moving_kind == PieceKind::Pawn || is_capture {
        position.half_move_clock = 0;
    } else {
        position.half_move_clock = position.half_move_clock.saturating_add(1);
    }
}

fn update_en_passant(position: &mut BoardPosition, mv: &ChessMove) {
    position.en_passant_file = if mv.double_pawn_push {
        Some(file_of(mv.target))
    } else {
        None
    };
}

fn move_pieces(position: &mut BoardPosition, mv: &ChessMove, moving_value: SquareValue) {
    position.squares[mv.target as usize] = mv.promotion.unwrap_or(moving_value);
    position.squares[mv.start as usize] = EMPTY;

    if let Some(captured) = mv.en_passant_capture {
        position.squares[captured as usize] = EMPTY;
    }
}

fn move_castling_rook(position: &mut BoardPosition, mv: &ChessMove, side: Color) {
    let Some(castle) = mv.castle else {
        return;
    };
    let own_rook = square_value(side, PieceKind::Rook);

    // The king may already stand on the rook's old square.
    if position.value_at(castle.rook_square) == own_rook {
        position.squares[castle.rook_square as usize] = EMPTY;
    }
    let rook_target = (mv.target as i16 - castle.increment as i16) as usize;
    position.squares[rook_target] = own_rook;
}

fn update_castling_rights(
    position: &mut BoardPosition,
    mv: &ChessMove,
    side: Color,
    moving_kind: PieceKind,
) -> ChessResult<()> {
    if mv.is_castle() || moving_kind == PieceKind::King {
        position.castling_rights.revoke_all(side);
    } else if moving_kind == PieceKind::Rook {
        // The wing is decided by which side of the king the rook left from.
        let king_square = position.require_king_square(side)?;
        let wing = if mv.start < king_square {
            CastleSide::QueenSide
        } else {
            CastleSide::KingSide
        };
        position.castling_rights.revoke(side, wing);
    }
    Ok(())
}

fn update_repetition_log(position: &mut BoardPosition, moving_kind: PieceKind) {
    if moving_kind == PieceKind::Pawn {
        position.repetition_log.clear();
    } else {
        position.repetition_log.push(position.squares);
    }
}
