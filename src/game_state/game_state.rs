//! Game-state classification result.
//!
//! A `GameState` is computed fresh from a position every time moves are
//! generated; it is never stored inside `BoardPosition`.

/// Coarse status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Play,
    End,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    TripleRepetition,
    FiftyMove,
}

/// Result of classifying a position for the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Play,
    End(EndReason),
}

impl GameState {
    #[inline]
    pub const fn status(&self) -> GameStatus {
        match self {
            GameState::Play => GameStatus::Play,
            GameState::End(_) => GameStatus::End,
        }
    }

    /// `None` while the game is still in play.
    #[inline]
    pub const fn reason(&self) -> Option<EndReason> {
        match self {
            GameState::Play => None,
            GameState::End(reason) => Some(*reason),
        }
    }

    #[inline]
    pub const fn is_over(&self) -> bool {
        matches!(self, GameState::End(_))
    }

    /// True for every ending that is not a checkmate.
    #[inline]
    pub const fn is_draw(&self) -> bool {
        matches!(
            self,
            GameState::End(EndReason::Stalemate | EndReason::TripleRepetition | EndReason::FiftyMove)
        )
    }
}
