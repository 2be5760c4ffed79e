//! Full legal move generation pipeline.
//!
//! Applies the draw pre-checks, generates pseudo-legal candidates, simulates
//! each one on a cloned position and drops those that leave the mover's king
//! attacked. When nothing survives the position is classified as checkmate or
//! stalemate.

use tracing::{debug, trace};

use crate::errors::ChessResult;
use crate::game_state::board_position::{BoardPosition, BoardSnapshot};
use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, REPETITION_MATCHES};
use crate::game_state::game_state::{EndReason, GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{GeneratedMoves, MoveGenerator};
use crate::move_generation::pseudo_move_generator::{attacked_squares, generate_pseudo_moves};
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, position: &BoardPosition) -> ChessResult<GeneratedMoves> {
        generate_moves(position)
    }
}

/// Classifies `position` and returns every legal move for the side to move.
pub fn generate_moves(position: &BoardPosition) -> ChessResult<GeneratedMoves> {
    if position.half_move_clock > FIFTY_MOVE_LIMIT {
        debug!(clock = position.half_move_clock, "fifty-move rule reached");
        return Ok((GameState::End(EndReason::FiftyMove), Vec::new()));
    }
    if has_triple_repetition(&position.repetition_log) {
        debug!("threefold repetition reached");
        return Ok((GameState::End(EndReason::TripleRepetition), Vec::new()));
    }

    let side = position.side_to_move;
    let king_square = position.require_king_square(side)?;

    let pseudo = generate_pseudo_moves(position);
    let pseudo_count = pseudo.len();
    let mut legal = Vec::<ChessMove>::with_capacity(pseudo_count);

    for mv in pseudo {
        if leaves_king_safe(position, &mv, king_square)? {
            legal.push(mv);
        }
    }

    trace!(?side, pseudo = pseudo_count, legal = legal.len(), "generated moves");

    if !legal.is_empty() {
        return Ok((GameState::Play, legal));
    }

    let state = if is_in_check(position, king_square) {
        GameState::End(EndReason::Checkmate)
    } else {
        GameState::End(EndReason::Stalemate)
    };
    debug!(?side, ?state, "no legal moves");
    Ok((state, Vec::new()))
}

/// Whether the side to move's king is attacked right now.
pub fn is_king_in_check(position: &BoardPosition) -> ChessResult<bool> {
    let king_square = position.require_king_square(position.side_to_move)?;
    Ok(is_in_check(position, king_square))
}

fn is_in_check(position: &BoardPosition, king_square: u8) -> bool {
    let mut opponent_view = position.clone();
    opponent_view.side_to_move = position.side_to_move.opposite();
    attacked_squares(&opponent_view)[king_square as usize]
}

/// Plays `mv` on a clone and tests the mover's king against every opponent
/// reply. Castling must keep the start, every transit square and the landing
/// square unattacked.
fn leaves_king_safe(position: &BoardPosition, mv: &ChessMove, king_square: u8) -> ChessResult<bool> {
    let mut simulated = position.clone();
    apply_move(&mut simulated, mv)?;

    // `apply_move` flipped the side to move, so this is the opponent's view.
    let attacked = attacked_squares(&simulated);

    if mv.is_castle() {
        return Ok(mv
            .castle_transit()
            .iter()
            .all(|square| !attacked[*square as usize]));
    }

    let king_after = if mv.start == king_square {
        mv.target
    } else {
        king_square
    };
    Ok(!attacked[king_after as usize])
}

/// Compares the latest snapshot with every earlier one that had the same side
/// to move (stepping back two entries at a time).
fn has_triple_repetition(log: &[BoardSnapshot]) -> bool {
    let Some(latest) = log.last() else {
        return false;
    };

    let mut matches = 0usize;
    for earlier in log.iter().rev().skip(2).step_by(2) {
        if earlier == latest {
            matches += 1;
            if matches >= REPETITION_MATCHES {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastleSide, Color};
    use crate::game_state::game_state::GameStatus;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("square")
    }

    fn find_move(moves: &[ChessMove], from: &str, to: &str) -> ChessMove {
        *moves
            .iter()
            .find(|mv| mv.start == sq(from) && mv.target == sq(to))
            .unwrap_or_else(|| panic!("{from}{to} should be legal"))
    }

    fn play(position: &mut BoardPosition, from: &str, to: &str) -> GeneratedMoves {
        let (_, moves) = generate_moves(position).expect("generation");
        let mv = find_move(&moves, from, to);
        apply_move(position, &mv).expect("apply");
        generate_moves(position).expect("generation")
    }

    #[test]
    fn initial_position_has_twenty_legal_moves() {
        let (state, moves) = generate_moves(&BoardPosition::new_game()).expect("generation");
        assert_eq!(state, GameState::Play);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn generator_trait_matches_free_function() {
        let position = BoardPosition::new_game();
        let (_, via_trait) = LegalMoveGenerator.generate_moves(&position).expect("generation");
        let (_, direct) = generate_moves(&position).expect("generation");
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn near_empty_board_produces_only_non_self_checking_moves() {
        let position = BoardPosition::from_fen("8/7k/8/Q7/8/8/8/K w - 0 1").expect("fen");
        let (state, moves) = generate_moves(&position).expect("generation");
        assert_eq!(state, GameState::Play);

        let mut dark_view = position.clone();
        dark_view.side_to_move = Color::Dark;
        assert!(!is_king_in_check(&dark_view).expect("king present"));

        // King a1: a2, b1, b2. Queen a5: 3 up, 3 down, 7 right, 4 + 3 diagonals.
        assert_eq!(moves.len(), 3 + 20);
        for mv in &moves {
            let mut after = position.clone();
            apply_move(&mut after, mv).expect("apply");
            after.side_to_move = Color::Light;
            assert!(!is_king_in_check(&after).expect("king present"), "{mv:?} leaves king attacked");
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // Light rook e2 pinned by dark rook e8 against king e1
        let position = BoardPosition::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("fen");
        let (_, moves) = generate_moves(&position).expect("generation");
        let rook_moves: Vec<&ChessMove> = moves.iter().filter(|mv| mv.start == sq("e2")).collect();
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|mv| mv.target % 8 == 4));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        // Dark rook on the 2nd rank covers d2, e2, f2
        let position = BoardPosition::from_fen("7k/8/8/8/8/8/r7/4K3 w - - 0 1").expect("fen");
        let (_, moves) = generate_moves(&position).expect("generation");
        let mut targets: Vec<u8> = moves.iter().map(|mv| mv.target).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![sq("d1"), sq("f1")]);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut position = BoardPosition::new_game();
        play(&mut position, "f2", "f3");
        play(&mut position, "e7", "e5");
        play(&mut position, "g2", "g4");
        let (state, moves) = play(&mut position, "d8", "h4");
        assert_eq!(state, GameState::End(EndReason::Checkmate));
        assert_eq!(state.status(), GameStatus::End);
        assert!(moves.is_empty());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        // Dark king a8, light queen c7, light king c6; dark to move
        let position = BoardPosition::from_fen("k7/2Q5/2K5/8/8/8/8/8 b - - 0 1").expect("fen");
        let (state, moves) = generate_moves(&position).expect("generation");
        assert_eq!(state, GameState::End(EndReason::Stalemate));
        assert!(moves.is_empty());
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let position = BoardPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fen");
        let (state, _) = generate_moves(&position).expect("generation");
        assert_eq!(state, GameState::End(EndReason::Checkmate));
    }

    #[test]
    fn fifty_move_clock_forces_draw_regardless_of_material() {
        let mut position = BoardPosition::new_game();
        position.half_move_clock = 99;
        assert_eq!(generate_moves(&position).expect("generation").0, GameState::Play);
        position.half_move_clock = 100;
        let (state, moves) = generate_moves(&position).expect("generation");
        assert_eq!(state, GameState::End(EndReason::FiftyMove));
        assert!(moves.is_empty());
    }

    #[test]
    fn fifty_move_counter_reaches_limit_through_quiet_moves() {
        let mut position = BoardPosition::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("fen");
        position.half_move_clock = 98;
        let (state, _) = play(&mut position, "a1", "a2");
        assert_eq!(position.half_move_clock, 99);
        assert_eq!(state, GameState::Play);
        let (state, moves) = play(&mut position, "e8", "d8");
        assert_eq!(position.half_move_clock, 100);
        assert_eq!(state, GameState::End(EndReason::FiftyMove));
        assert!(moves.is_empty());
    }

    #[test]
    fn third_occurrence_is_triple_repetition() {
        let mut position = BoardPosition::new_game();
        let cycle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        let mut states = Vec::new();
        for ply in 0..9 {
            let (from, to) = cycle[ply % 4];
            states.push(play(&mut position, from, to).0);
        }
        assert!(states[..8].iter().all(|state| *state == GameState::Play));
        assert_eq!(states[8], GameState::End(EndReason::TripleRepetition));
    }

    #[test]
    fn pawn_move_clears_repetition_history() {
        let mut position = BoardPosition::new_game();
        let cycle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for ply in 0..8 {
            let (from, to) = cycle[ply % 4];
            play(&mut position, from, to);
        }
        play(&mut position, "e2", "e3");
        assert!(position.repetition_log.is_empty());
        let (state, _) = play(&mut position, "g8", "f6");
        assert_eq!(state, GameState::Play);
    }

    #[test]
    fn castling_legal_when_only_rook_square_is_attacked() {
        // Dark rook h7 attacks the light rook on h1, not the king's path
        let position = BoardPosition::from_fen("4k3/7r/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        let (_, moves) = generate_moves(&position).expect("generation");
        assert!(moves.contains(&ChessMove::castling(sq("e1"), sq("g1"), 1, sq("h1"))));
    }

    #[test]
    fn castling_rejected_out_of_through_or_into_check() {
        // In check from e-file rook
        let in_check = BoardPosition::from_fen("4r2k/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        // f1 covered by rook on f8
        let through = BoardPosition::from_fen("5r1k/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        // g1 covered by rook on g8
        let into = BoardPosition::from_fen("6rk/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        // In check from a pawn on d2
        let pawn_check = BoardPosition::from_fen("7k/8/8/8/8/8/3p4/4K2R w K - 0 1").expect("fen");
        // Clear
        let clear = BoardPosition::from_fen("7k/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");

        for position in [in_check, through, into, pawn_check] {
            let (_, moves) = generate_moves(&position).expect("generation");
            assert!(!moves.iter().any(|mv| mv.is_castle()), "{}", position.get_fen());
        }
        let (_, moves) = generate_moves(&clear).expect("generation");
        assert_eq!(moves.iter().filter(|mv| mv.is_castle()).count(), 1);
    }

    #[test]
    fn queen_side_castling_rejected_through_or_into_check() {
        // d1 covered by rook on d8
        let through = BoardPosition::from_fen("3r3k/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("fen");
        // c1 covered by rook on c8
        let into = BoardPosition::from_fen("2r4k/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("fen");

        for position in [through, into] {
            let (_, moves) = generate_moves(&position).expect("generation");
            assert!(!moves.iter().any(|mv| mv.is_castle()), "{}", position.get_fen());
        }
    }

    #[test]
    fn queen_side_castle_ignores_attack_on_b_file() {
        // b1 is passed by the rook only; attacked by rook on b8
        let position = BoardPosition::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("fen");
        let (_, moves) = generate_moves(&position).expect("generation");
        assert!(moves.contains(&ChessMove::castling(sq("e1"), sq("c1"), -1, sq("a1"))));
    }

    #[test]
    fn king_move_revokes_castling_for_good() {
        let mut position = BoardPosition::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        play(&mut position, "e1", "f1");
        play(&mut position, "a8", "b8");
        play(&mut position, "f1", "e1");
        assert!(!position.castling_rights.can_castle(Color::Light, CastleSide::KingSide));
        assert!(!position.castling_rights.can_castle(Color::Light, CastleSide::QueenSide));
        assert!(position.castling_rights.can_castle(Color::Dark, CastleSide::KingSide));
        assert!(!position.castling_rights.can_castle(Color::Dark, CastleSide::QueenSide));

        let (_, moves) = play(&mut position, "b8", "a8");
        assert!(!moves.iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn en_passant_only_on_the_immediately_following_ply() {
        // Light pawn e5, dark pawn d7; dark to move
        let mut position = BoardPosition::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen");
        let (_, moves) = play(&mut position, "d7", "d5");
        let capture = find_move(&moves, "e5", "d6");
        assert_eq!(capture.en_passant_capture, Some(sq("d5")));

        let mut taken = position.clone();
        apply_move(&mut taken, &capture).expect("apply");
        assert_eq!(taken.value_at(sq("d5")), 0);

        // Decline: both kings shuffle, the chance is gone
        play(&mut position, "e1", "f1");
        let (_, moves) = play(&mut position, "e8", "f8");
        assert!(!moves.iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn en_passant_exposing_own_king_is_illegal() {
        // Light king a5, light pawn b5, dark pawn c7 about to double step, dark rook h5
        let mut position = BoardPosition::from_fen("4k3/2p5/8/KP5r/8/8/8/8 b - - 0 1").expect("fen");
        let (_, moves) = play(&mut position, "c7", "c5");
        assert!(!moves.iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn repetition_needs_same_side_to_move_entries() {
        let a = [0u8; 64];
        let mut b = [0u8; 64];
        b[0] = 9;
        assert!(has_triple_repetition(&[a, b, a, b, a]));
        assert!(!has_triple_repetition(&[a, a, a]));
        assert!(!has_triple_repetition(&[]));
    }
}
