use crate::errors::ChessResult;
use crate::game_state::board_position::BoardPosition;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, position: &BoardPosition, mv: &ChessMove) {
        self.nodes += 1;
        if !position.is_empty_square(mv.target) || mv.is_en_passant() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
    }
}

/// Counts leaf nodes of the legal-move tree using the standard generator.
pub fn perft_legal(position: &BoardPosition, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &BoardPosition,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_recurse(generator, position, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    position: &BoardPosition,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let (_, moves) = generator.generate_moves(position)?;

    for mv in &moves {
        if depth == 1 {
            counts.record_leaf(position, mv);
            continue;
        }

        let mut child = position.clone();
        apply_move(&mut child, mv)?;
        perft_recurse(generator, &child, depth - 1, counts)?;
    }

    Ok(())
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide(position: &BoardPosition, depth: u8) -> ChessResult<Vec<(ChessMove, usize)>> {
    let (_, moves) = LegalMoveGenerator.generate_moves(position)?;
    let mut out = Vec::with_capacity(moves.len());

    for mv in moves {
        let mut child = position.clone();
        apply_move(&mut child, &mv)?;
        let nodes = perft_legal(&child, depth.saturating_sub(1))?.nodes;
        out.push((mv, nodes));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn nodes(fen: &str, depth: u8) -> usize {
        let position = BoardPosition::from_fen(fen).expect("fen");
        perft_legal(&position, depth).expect("perft").nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft_legal(&BoardPosition::new_game(), 0).expect("perft");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_initial_position() {
        assert_eq!(nodes(STARTING_POSITION_FEN, 1), 20);
        assert_eq!(nodes(STARTING_POSITION_FEN, 2), 400);
        assert_eq!(nodes(STARTING_POSITION_FEN, 3), 8902);
    }

    #[test]
    fn perft_initial_position_depth_three_captures() {
        let counts = perft_legal(&BoardPosition::new_game(), 3).expect("perft");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn perft_kiwipete() {
        let counts = perft_legal(&BoardPosition::from_fen(KIWIPETE_FEN).expect("fen"), 1).expect("perft");
        assert_eq!(counts.nodes, 48);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);
        assert_eq!(nodes(KIWIPETE_FEN, 2), 2039);
    }

    #[test]
    fn perft_endgame_with_en_passant_pins() {
        assert_eq!(nodes(ENDGAME_FEN, 1), 14);
        assert_eq!(nodes(ENDGAME_FEN, 2), 191);
        assert_eq!(nodes(ENDGAME_FEN, 3), 2812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = BoardPosition::new_game();
        let divided = perft_divide(&position, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
