//! FEN-to-BoardPosition parser.
//!
//! Reads piece placement, side to move and castling availability. The en
//! passant and half-move fields are accepted but not trusted: en passant is
//! derived from the next double pawn push and the clock starts at zero. A
//! numeric full-move field is kept for FEN output.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<BoardPosition> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;

    // En passant and half-move clock, when present, are ignored.
    let _ = parts.next();
    let _ = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut position = BoardPosition::new_empty();
    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.fullmove_number = fullmove_part
        .and_then(|part| part.parse::<u16>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1);

    validate_kings(&position)?;
    Ok(position)
}

/// Each side needs exactly one king.
fn validate_kings(position: &BoardPosition) -> ChessResult<()> {
    for color in [Color::Light, Color::Dark] {
        let king = square_value(color, PieceKind::King);
        match position.squares.iter().filter(|&&value| value == king).count() {
            0 => return Err(ChessErrors::MissingKing(color)),
            1 => {}
            _ => {
                return Err(ChessErrors::InvalidFen {
                    reason: format!("more than one {color:?} king"),
                })
            }
        }
    }
    Ok(())
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen {
        reason: reason.to_owned(),
    }
}

fn parse_board(board_part: &str, position: &mut BoardPosition) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // First rank in the string is row 0 (rank 8). Ranks shorter than eight
    // files leave their remaining squares empty.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            position.squares[row * 8 + file] = square_value(color, kind);
            file += 1;
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFen {
            reason: format!("invalid side-to-move field: {side_part}"),
        }),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => {
                return Err(ChessErrors::InvalidFen {
                    reason: format!("invalid castling rights character: {ch}"),
                })
            }
        }
    }

    Ok(rights)
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
