use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{
    distance_to_edge, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, DIRECTION_OFFSETS, ORTHOGONAL_DIRECTIONS,
};
use crate::moves::move_descriptions::ChessMove;

/// Bishop, rook and queen rays, each stopped by the first occupied square.
pub fn generate_sliding_moves(
    position: &BoardPosition,
    start: Square,
    color: Color,
    kind: PieceKind,
    out: &mut Vec<ChessMove>,
) {
    let directions = match kind {
        PieceKind::Bishop => DIAGONAL_DIRECTIONS,
        PieceKind::Rook => ORTHOGONAL_DIRECTIONS,
        PieceKind::Queen => ALL_DIRECTIONS,
        _ => return,
    };

    for direction in directions {
        let offset = DIRECTION_OFFSETS[direction] as i16;
        for step in 1..=distance_to_edge(start, direction) as i16 {
            let target = (start as i16 + offset * step) as Square;
            let occupant = color_of(position.value_at(target));

            if occupant == Some(color) {
                break;
            }
            out.push(ChessMove::quiet(start, target));
            if occupant.is_some() {
                break;
            }
        }
    }
}
