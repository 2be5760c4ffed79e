use crate::game_state::chess_types::{Square, SquareValue};

/// Castling payload: the king's step direction and the square the matching
/// rook stands on before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleDescription {
    pub increment: i8,
    pub rook_square: Square,
}

/// A candidate or legal move.
///
/// Moves do not record the captured piece; callers that need to undo a move
/// keep a clone of the position instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub start: Square,
    pub target: Square,
    /// Set on a pawn's two-square advance; opens en passant for one ply.
    pub double_pawn_push: bool,
    /// Square of the pawn removed by an en passant capture.
    pub en_passant_capture: Option<Square>,
    /// Square value written to `target` instead of the moving pawn.
    pub promotion: Option<SquareValue>,
    pub castle: Option<CastleDescription>,
}

impl ChessMove {
    #[inline]
    pub const fn quiet(start: Square, target: Square) -> Self {
        Self {
            start,
            target,
            double_pawn_push: false,
            en_passant_capture: None,
            promotion: None,
            castle: None,
        }
    }

    #[inline]
    pub const fn double_push(start: Square, target: Square) -> Self {
        Self {
            double_pawn_push: true,
            ..Self::quiet(start, target)
        }
    }

    #[inline]
    pub const fn en_passant(start: Square, target: Square, captured: Square) -> Self {
        Self {
            en_passant_capture: Some(captured),
            ..Self::quiet(start, target)
        }
    }

    #[inline]
    pub const fn promotion(start: Square, target: Square, piece: SquareValue) -> Self {
        Self {
            promotion: Some(piece),
            ..Self::quiet(start, target)
        }
    }

    #[inline]
    pub const fn castling(start: Square, target: Square, increment: i8, rook_square: Square) -> Self {
        Self {
            castle: Some(CastleDescription {
                increment,
                rook_square,
            }),
            ..Self::quiet(start, target)
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Squares the king occupies while castling, start and landing included.
    pub fn castle_transit(&self) -> Vec<Square> {
        let Some(castle) = self.castle else {
            return Vec::new();
        };
        let steps = self.start.abs_diff(self.target) as i16;
        (0..=steps)
            .map(|i| (self.start as i16 + castle.increment as i16 * i) as Square)
            .collect()
    }
}
