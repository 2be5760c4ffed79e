use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{offset_within, KNIGHT_OFFSETS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    position: &BoardPosition,
    start: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for offset in KNIGHT_OFFSETS {
        let Some(target) = offset_within(start, offset, 2) else {
            continue;
        };
        if color_of(position.value_at(target)) == Some(color) {
            continue;
        }
        out.push(ChessMove::quiet(start, target));
    }
}
