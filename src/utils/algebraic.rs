//! Square naming and coordinate move input.
//!
//! Converts between human-readable squares (e.g. `e4`) and the top-left based
//! square index, and resolves `e2e4` / `e7e8q` style input against a list of
//! legal moves.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{piece_kind_of, PieceKind, Square};
use crate::moves::move_descriptions::ChessMove;

/// Convert a square name (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = b'8' - rank;
    Ok(row_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to its name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'8' - square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Coordinate form of a move, `start` + `target` + optional promotion letter.
pub fn move_to_coordinates(mv: &ChessMove) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.start)?;
    out.push_str(&square_to_algebraic(mv.target)?);
    if let Some(kind) = mv.promotion.and_then(piece_kind_of) {
        out.push(promotion_letter(kind));
    }
    Ok(out)
}

/// Finds the legal move matching `input`. A promotion without a letter picks
/// the queen.
pub fn parse_coordinate_move(input: &str, legal_moves: &[ChessMove]) -> ChessResult<ChessMove> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.to_ascii_lowercase();
    if !compact.is_ascii() || (compact.len() != 4 && compact.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(input.to_owned()));
    }

    let start = algebraic_to_square(&compact[0..2])?;
    let target = algebraic_to_square(&compact[2..4])?;
    let wanted_promotion = match compact.chars().nth(4) {
        Some(letter) => Some(
            promotion_kind(letter).ok_or_else(|| ChessErrors::InvalidAlgebraicString(input.to_owned()))?,
        ),
        None => None,
    };

    legal_moves
        .iter()
        .filter(|mv| mv.start == start && mv.target == target)
        .find(|mv| {
            let promoted = mv.promotion.and_then(piece_kind_of);
            match (promoted, wanted_promotion) {
                (None, None) => true,
                (Some(kind), None) => kind == PieceKind::Queen,
                (Some(kind), Some(wanted)) => kind == wanted,
                (None, Some(_)) => false,
            }
        })
        .copied()
        .ok_or(ChessErrors::MoveNotInLegalList { start, target })
}

fn promotion_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::King => 'k',
        PieceKind::Pawn => 'p',
    }
}

fn promotion_kind(letter: char) -> Option<PieceKind> {
    match letter {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
