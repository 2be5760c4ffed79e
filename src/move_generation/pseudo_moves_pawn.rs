use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{file_of, offset_square, offset_within, row_of};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(
    position: &BoardPosition,
    start: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let forward = color.pawn_direction();
    let promotes = row_of(start) == color.pawn_promotion_row();

    if let Some(single) = offset_square(start, forward) {
        if position.is_empty_square(single) {
            if promotes {
                push_promotions(start, single, color, out);
            } else {
                out.push(ChessMove::quiet(start, single));

                if row_of(start) == color.pawn_start_row() {
                    if let Some(double) = offset_square(single, forward) {
                        if position.is_empty_square(double) {
                            out.push(ChessMove::double_push(start, double));
                        }
                    }
                }
            }
        }
    }

    for target in pawn_capture_squares(start, color).into_iter().flatten() {
        match color_of(position.value_at(target)) {
            Some(occupant) if occupant != color => {
                if promotes {
                    push_promotions(start, target, color, out);
                } else {
                    out.push(ChessMove::quiet(start, target));
                }
            }
            Some(_) => {}
            None => {
                if let Some(captured) = en_passant_victim(position, start, target, color) {
                    out.push(ChessMove::en_passant(start, target, captured));
                }
            }
        }
    }
}

/// The two diagonal squares a pawn on `start` attacks, wraparound removed.
#[inline]
pub fn pawn_capture_squares(start: Square, color: Color) -> [Option<Square>; 2] {
    let forward = color.pawn_direction();
    [
        offset_within(start, forward + 1, 1),
        offset_within(start, forward - 1, 1),
    ]
}

fn en_passant_victim(position: &BoardPosition, start: Square, target: Square, color: Color) -> Option<Square> {
    let file = position.en_passant_file?;
    if row_of(start) != color.en_passant_row() {
        return None;
    }

    let captured = offset_square(target, -color.pawn_direction())?;
    if file_of(captured) != file {
        return None;
    }
    Some(captured)
}

fn push_promotions(start: Square, target: Square, color: Color, out: &mut Vec<ChessMove>) {
    for kind in PROMOTION_KINDS {
        out.push(ChessMove::promotion(start, target, square_value(color, kind)));
    }
}
