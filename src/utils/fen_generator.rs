use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;

/// Six-field FEN for the position. The en passant square is rebuilt from the
/// stored file and the side to move.
pub fn generate_fen(position: &BoardPosition) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(&position.castling_rights);
    let en_passant = generate_en_passant_field(position);

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, position.half_move_clock, position.fullmove_number
    )
}

fn generate_board_field(position: &BoardPosition) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_at(row * 8 + file) {
                Some((color, kind)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(color, kind));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

// The pawn that double-stepped belongs to the side that just moved.
fn generate_en_passant_field(position: &BoardPosition) -> String {
    let Some(file) = position.en_passant_file else {
        return "-".to_owned();
    };

    let rank = match position.side_to_move {
        Color::Light => '6',
        Color::Dark => '3',
    };
    format!("{}{}", char::from(b'a' + file), rank)
}
