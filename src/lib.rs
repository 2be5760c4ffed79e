//! Crate root module declarations for the mailbox chess rules core.
//!
//! Exposes the board model, geometry tables, pseudo-move and legal-move
//! generation, move application, the game session and text utilities so the
//! terminal binary, benches and tests share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_position;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod geometry;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_move_generator;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::generate_moves;
pub use utils::fen_parser::parse_fen as load_position;
