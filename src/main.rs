use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mailbox_chess::errors::ChessResult;
use mailbox_chess::game_state::board_position::BoardPosition;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_state::{EndReason, GameState};
use mailbox_chess::move_generation::perft::{perft_divide, perft_legal};
use mailbox_chess::session::game_session::GameSession;
use mailbox_chess::session::session_config::{GameMode, SessionConfig, DEFAULT_CPU_DELAY_MS};
use mailbox_chess::utils::algebraic::move_to_coordinates;
use mailbox_chess::utils::render_game_state::render_board;

/// Terminal front end for the mailbox chess rules core.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a game in the terminal.
    Play {
        /// Starting position.
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,

        #[arg(long, value_enum, default_value_t = ModeArg::Pvp)]
        mode: ModeArg,

        /// Side played by the human in `pvc` mode.
        #[arg(long, value_enum, default_value_t = SideArg::White)]
        human: SideArg,

        /// Pause before each computer move.
        #[arg(long, default_value_t = DEFAULT_CPU_DELAY_MS)]
        cpu_delay_ms: u64,

        /// Seed for the computer's move picker.
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many plies.
        #[arg(long)]
        max_plies: Option<u32>,
    },

    /// Count leaf nodes of the legal-move tree.
    Perft {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,

        #[arg(short, long, default_value_t = 3)]
        depth: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Pvp,
    Pvc,
    Cvc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::Light,
            SideArg::Black => Color::Dark,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Command::Play {
            fen,
            mode,
            human,
            cpu_delay_ms,
            seed,
            max_plies,
        } => {
            let mode = match mode {
                ModeArg::Pvp => GameMode::PlayerVsPlayer,
                ModeArg::Pvc => GameMode::PlayerVsComputer { human: human.into() },
                ModeArg::Cvc => GameMode::ComputerVsComputer,
            };
            run_play(SessionConfig {
                start_fen: fen,
                mode,
                cpu_delay_ms,
                seed,
                max_plies,
            })
        }
        Command::Perft { fen, depth } => run_perft(&fen, depth),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_perft(fen: &str, depth: u8) -> ChessResult<()> {
    let position = BoardPosition::from_fen(fen)?;

    for (mv, nodes) in perft_divide(&position, depth)? {
        println!("{}: {}", move_to_coordinates(&mv)?, nodes);
    }

    let counts = perft_legal(&position, depth)?;
    println!();
    println!("nodes      {}", counts.nodes);
    println!("captures   {}", counts.captures);
    println!("en passant {}", counts.en_passant);
    println!("castles    {}", counts.castles);
    println!("promotions {}", counts.promotions);
    Ok(())
}

fn run_play(config: SessionConfig) -> ChessResult<()> {
    let delay = Duration::from_millis(config.cpu_delay_ms);
    let mut session = GameSession::new(config)?;
    info!(engine = session.engine_name(), mode = ?session.mode(), "session started");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_position(&session);

    loop {
        if session.ply_limit_reached() {
            println!("ply limit reached after {} plies", session.plies_played());
            return Ok(());
        }

        if session.is_computer_turn() {
            thread::sleep(delay);
            if let Some(mv) = session.play_engine_move()? {
                println!("computer plays {}", move_to_coordinates(&mv)?);
            }
            print_position(&session);
            continue;
        }

        // Nobody left to move in an unattended game.
        if session.state().is_over() && session.mode() == GameMode::ComputerVsComputer {
            return Ok(());
        }

        print!("{}> ", side_name(session.position().side_to_move));
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "help" => print_help(),
            "board" => print_position(&session),
            "fen" => println!("{}", session.position().get_fen()),
            "moves" => {
                let listed: Vec<String> = session
                    .legal_moves()
                    .iter()
                    .filter_map(|mv| move_to_coordinates(mv).ok())
                    .collect();
                println!("{}", listed.join(" "));
            }
            "new" => {
                session.new_game()?;
                print_position(&session);
            }
            _ if input.starts_with("load ") => match session.load_fen(input["load ".len()..].trim()) {
                Ok(()) => print_position(&session),
                Err(e) => println!("{e}"),
            },
            _ => match session.play_coordinates(input) {
                Ok(_) => print_position(&session),
                Err(e) => {
                    warn!(input, "rejected move input");
                    println!("{e}");
                }
            },
        }
    }
}

fn print_position(session: &GameSession) {
    println!("{}", render_board(session.position()));
    if let Some(mv) = session.previous_move() {
        if let Ok(text) = move_to_coordinates(&mv) {
            println!("last move: {text}");
        }
    }

    match session.state() {
        GameState::Play => println!("{} to move", side_name(session.position().side_to_move)),
        GameState::End(reason) => {
            println!("{}", describe_end(reason, session.position().side_to_move));
            if session.mode() != GameMode::ComputerVsComputer {
                println!("type `new` for another game or `quit`");
            }
        }
    }
}

fn describe_end(reason: EndReason, side_to_move: Color) -> String {
    match reason {
        EndReason::Checkmate => format!("checkmate, {} wins", side_name(side_to_move.opposite())),
        EndReason::Stalemate => "draw by stalemate".to_owned(),
        EndReason::TripleRepetition => "draw by threefold repetition".to_owned(),
        EndReason::FiftyMove => "draw by the fifty-move rule".to_owned(),
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::Light => "white",
        Color::Dark => "black",
    }
}

fn print_help() {
    println!("e2e4 | e7e8q   play a move");
    println!("moves          list legal moves");
    println!("board          show the board");
    println!("fen            print the current FEN");
    println!("new            restart from the starting position");
    println!("load <fen>     load a position");
    println!("quit           leave");
}
