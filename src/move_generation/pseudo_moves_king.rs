use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_rules::castle_landing_square;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{distance_to_edge, offset_within, row_of, ALL_DIRECTIONS, DIRECTION_OFFSETS, EAST, WEST};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(
    position: &BoardPosition,
    start: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for direction in ALL_DIRECTIONS {
        let Some(target) = offset_within(start, DIRECTION_OFFSETS[direction], 1) else {
            continue;
        };
        if color_of(position.value_at(target)) == Some(color) {
            continue;
        }
        out.push(ChessMove::quiet(start, target));
    }

    generate_castling_moves(position, start, color, out);
}

fn generate_castling_moves(
    position: &BoardPosition,
    king_from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let back_row = match color {
        Color::Light => 7,
        Color::Dark => 0,
    };
    if row_of(king_from) != back_row {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !position.castling_rights.can_castle(color, side) {
            continue;
        }

        let landing = castle_landing_square(color, side);
        let increment = side.increment();
        if landing == king_from || (landing > king_from) != (increment > 0) {
            continue;
        }

        if let Some(rook_square) = find_castling_rook(position, king_from, color, side) {
            out.push(ChessMove::castling(king_from, landing, increment, rook_square));
        }
    }
}

/// Scans outward from the king toward the edge on `side` and returns the
/// first square that is occupied, if it holds a rook of `color`. Every square
/// passed over on the way is therefore empty.
fn find_castling_rook(
    position: &BoardPosition,
    king_from: Square,
    color: Color,
    side: CastleSide,
) -> Option<Square> {
    let direction = match side {
        CastleSide::KingSide => EAST,
        CastleSide::QueenSide => WEST,
    };
    let own_rook = square_value(color, PieceKind::Rook);

    for step in 1..=distance_to_edge(king_from, direction) as i16 {
        let square = (king_from as i16 + DIRECTION_OFFSETS[direction] as i16 * step) as Square;
        match position.value_at(square) {
            EMPTY => continue,
            value if value == own_rook => return Some(square),
            _ => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::Color;
    use crate::moves::move_descriptions::ChessMove;

    fn king_moves(fen: &str, start: u8, color: Color) -> Vec<ChessMove> {
        let position = BoardPosition::from_fen(fen).expect("fen");
        let mut out = Vec::new();
        generate_king_moves(&position, start, color, &mut out);
        out
    }

    #[test]
    fn king_on_a_file_does_not_wrap_to_h_file() {
        // Light king a4 (32)
        let mut targets: Vec<u8> = king_moves("7k/8/8/8/K7/8/8/8 w - - 0 1", 32, Color::Light)
            .iter()
            .map(|mv| mv.target)
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![24, 25, 33, 40, 41]);
    }

    #[test]
    fn castling_offered_on_both_wings_when_path_is_clear() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 60, Color::Light);
        let castles: Vec<&ChessMove> = moves.iter().filter(|mv| mv.is_castle()).collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.contains(&&ChessMove::castling(60, 62, 1, 63)));
        assert!(castles.contains(&&ChessMove::castling(60, 58, -1, 56)));
    }

    #[test]
    fn castling_blocked_by_piece_between_king_and_rook() {
        // Dark knight b8 blocks queen side, king side clear
        let moves = king_moves("rn2k2r/8/8/8/8/8/8/4K3 b kq - 0 1", 4, Color::Dark);
        let castles: Vec<&ChessMove> = moves.iter().filter(|mv| mv.is_castle()).collect();
        assert_eq!(castles, vec![&ChessMove::castling(4, 6, 1, 7)]);
    }

    #[test]
    fn castling_needs_the_right_even_with_rook_in_place() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R3K2R w K - 0 1", 60, Color::Light);
        let castles: Vec<&ChessMove> = moves.iter().filter(|mv| mv.is_castle()).collect();
        assert_eq!(castles, vec![&ChessMove::castling(60, 62, 1, 63)]);
    }
}
