//! Core value types for the 64-square board.
//!
//! Squares are indexed `0..=63` row-major from a8 (top-left) to h1
//! (bottom-right). Each square holds a `SquareValue`: the piece kind code plus
//! a color offset (`8` for dark, `16` for light), or `0` when empty.

/// Board square index (`0..=63`, `0 == a8`, `63 == h1`).
pub type Square = u8;

/// Encoded square content, `piece kind code + color offset`.
pub type SquareValue = u8;

pub const EMPTY: SquareValue = 0;
pub const DARK_OFFSET: SquareValue = 8;
pub const LIGHT_OFFSET: SquareValue = 16;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn offset(self) -> SquareValue {
        match self {
            Color::Light => LIGHT_OFFSET,
            Color::Dark => DARK_OFFSET,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Pawn push direction as a square index delta.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -8,
            Color::Dark => 8,
        }
    }

    /// Row (counted from the top) a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row a pawn of this color must stand on to promote with its next step.
    #[inline]
    pub const fn pawn_promotion_row(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Row a pawn of this color must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> u8 {
        match self {
            Color::Light => 3,
            Color::Dark => 4,
        }
    }
}

/// Piece kind (color is carried by the square value offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> SquareValue {
        match self {
            PieceKind::King => 1,
            PieceKind::Pawn => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 4,
            PieceKind::Rook => 5,
            PieceKind::Queen => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: SquareValue) -> Option<Self> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Pawn),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

#[inline]
pub const fn square_value(color: Color, kind: PieceKind) -> SquareValue {
    kind.code() + color.offset()
}

/// Color of a square value, `None` for an empty square.
#[inline]
pub const fn color_of(value: SquareValue) -> Option<Color> {
    if value == EMPTY {
        None
    } else if value > LIGHT_OFFSET {
        Some(Color::Light)
    } else {
        Some(Color::Dark)
    }
}

#[inline]
pub const fn piece_kind_of(value: SquareValue) -> Option<PieceKind> {
    match color_of(value) {
        Some(color) => PieceKind::from_code(value - color.offset()),
        None => None,
    }
}

#[inline]
pub const fn decode_square_value(value: SquareValue) -> Option<(Color, PieceKind)> {
    match (color_of(value), piece_kind_of(value)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

/// Wing of the board a castling move heads towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Square index step the king takes while castling to this side.
    #[inline]
    pub const fn increment(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }
}

/// Four independent castling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_kingside,
            (Color::Light, CastleSide::QueenSide) => self.light_queenside,
            (Color::Dark, CastleSide::KingSide) => self.dark_kingside,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queenside,
        }
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_kingside = false,
            (Color::Light, CastleSide::QueenSide) => self.light_queenside = false,
            (Color::Dark, CastleSide::KingSide) => self.dark_kingside = false,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queenside = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }
}
