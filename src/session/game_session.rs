//! Game session.
//!
//! `GameSession` owns the one live `BoardPosition` of a game together with the
//! state and legal list generated for it. Every move, human or computer, is
//! checked against that list before it reaches `apply_move`, and nothing is
//! applied once the game has ended.

use tracing::{debug, info};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::session::session_config::{GameMode, SessionConfig};
use crate::utils::algebraic::parse_coordinate_move;
use crate::utils::fen_parser::parse_fen;

pub struct GameSession {
    config: SessionConfig,
    position: BoardPosition,
    state: GameState,
    legal_moves: Vec<ChessMove>,
    previous_move: Option<ChessMove>,
    plies_played: u32,
    engine: Box<dyn Engine>,
}

impl GameSession {
    /// Session with the random engine, seeded when the config carries a seed.
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let engine: Box<dyn Engine> = match config.seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        };
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: SessionConfig, engine: Box<dyn Engine>) -> ChessResult<Self> {
        let position = parse_fen(&config.start_fen)?;
        let (state, legal_moves) = generate_moves(&position)?;

        Ok(Self {
            config,
            position,
            state,
            legal_moves,
            previous_move: None,
            plies_played: 0,
            engine,
        })
    }

    /// Replaces the game with `fen`. On error the current game is untouched.
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        let position = parse_fen(fen)?;
        let (state, legal_moves) = generate_moves(&position)?;

        self.position = position;
        self.state = state;
        self.legal_moves = legal_moves;
        self.previous_move = None;
        self.plies_played = 0;
        self.engine.new_game();

        info!(fen, ?state, "loaded position");
        Ok(())
    }

    /// Restarts from the configured starting FEN.
    pub fn new_game(&mut self) -> ChessResult<()> {
        let fen = self.config.start_fen.clone();
        self.load_fen(&fen)
    }

    pub fn position(&self) -> &BoardPosition {
        &self.position
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    pub fn previous_move(&self) -> Option<ChessMove> {
        self.previous_move
    }

    pub fn plies_played(&self) -> u32 {
        self.plies_played
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn ply_limit_reached(&self) -> bool {
        self.config
            .max_plies
            .is_some_and(|limit| self.plies_played >= limit)
    }

    /// True when the engine should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_over()
            && !self.ply_limit_reached()
            && self.config.mode.is_computer_turn(self.position.side_to_move)
    }

    /// Applies `mv` if it is in the current legal list.
    pub fn play_move(&mut self, mv: &ChessMove) -> ChessResult<GameState> {
        if let GameState::End(reason) = self.state {
            return Err(ChessErrors::GameAlreadyOver(reason));
        }
        if !self.legal_moves.contains(mv) {
            return Err(ChessErrors::MoveNotInLegalList {
                start: mv.start,
                target: mv.target,
            });
        }

        // Nothing is committed until the reply position has been classified.
        let mover = self.position.side_to_move;
        let mut next = self.position.clone();
        apply_move(&mut next, mv)?;
        let (state, legal_moves) = generate_moves(&next)?;

        self.position = next;
        self.state = state;
        self.legal_moves = legal_moves;
        self.previous_move = Some(*mv);
        self.plies_played += 1;

        debug!(?mover, start = mv.start, target = mv.target, "applied move");
        if let GameState::End(reason) = state {
            info!(?reason, draw = state.is_draw(), plies = self.plies_played, "game over");
        }

        Ok(state)
    }

    /// Resolves `e2e4` style input against the legal list and plays it.
    pub fn play_coordinates(&mut self, input: &str) -> ChessResult<GameState> {
        if let GameState::End(reason) = self.state {
            return Err(ChessErrors::GameAlreadyOver(reason));
        }
        let mv = parse_coordinate_move(input, &self.legal_moves)?;
        self.play_move(&mv)
    }

    /// Lets the engine pick from the legal list and plays its choice.
    pub fn play_engine_move(&mut self) -> ChessResult<Option<ChessMove>> {
        if let GameState::End(reason) = self.state {
            return Err(ChessErrors::GameAlreadyOver(reason));
        }

        let output = self.engine.choose_move(&self.position, &self.legal_moves)?;
        for line in &output.info_lines {
            debug!(engine = self.engine.name(), "{line}");
        }

        let Some(mv) = output.best_move else {
            return Ok(None);
        };
        self.play_move(&mv)?;
        Ok(Some(mv))
    }
}
