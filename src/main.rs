//! Othello-Minimax: play Othello in the terminal.
//!
//! ## Usage
//!
//! - `othello-minimax` - Show a demo (minimax vs a random player)
//! - `othello-minimax play` - Play a game on the console
//! - `othello-minimax demo` - Run the demo
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello_minimax::board::{Board, Player};
use othello_minimax::console::{Config, Console, Mode};
use othello_minimax::constants::{DEFAULT_DEPTH, SIZE};
use othello_minimax::game::Game;
use othello_minimax::playout::random_move;
use othello_minimax::search::{SearchMode, Searcher};

/// Othello-Minimax: an Othello engine with a fixed-depth minimax player
#[derive(Parser)]
#[command(name = "othello-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play(PlayArgs),
    /// Let the minimax player face a random player
    Demo {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: i32,
        /// Seed for the random player
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Hvc)]
    mode: ModeArg,
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: i32,
    /// Side played by the computer in human-vs-computer mode
    #[arg(long, value_enum, default_value_t = Side::White)]
    computer: Side,
    /// Board size (even, 4 to 8)
    #[arg(long, default_value_t = SIZE)]
    size: usize,
    #[arg(long, value_enum, default_value_t = SearchArg::Copy)]
    search: SearchArg,
}

#[derive(Copy, Clone, ValueEnum)]
enum ModeArg {
    /// Human vs human
    Hvh,
    /// Human vs computer
    Hvc,
    /// Computer vs computer
    Cvc,
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    Black,
    White,
}

#[derive(Copy, Clone, ValueEnum)]
enum SearchArg {
    /// Copy the board at every node
    Copy,
    /// Apply and undo moves on one board
    MakeUnmake,
}

impl From<PlayArgs> for Config {
    fn from(args: PlayArgs) -> Self {
        Config {
            mode: match args.mode {
                ModeArg::Hvh => Mode::HumanVsHuman,
                ModeArg::Hvc => Mode::HumanVsComputer,
                ModeArg::Cvc => Mode::ComputerVsComputer,
            },
            depth: args.depth,
            computer: match args.computer {
                Side::Black => Player::Black,
                Side::White => Player::White,
            },
            size: args.size,
            search: match args.search {
                SearchArg::Copy => SearchMode::Copy,
                SearchArg::MakeUnmake => SearchMode::MakeUnmake,
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => {
            let stdin = std::io::stdin();
            let mut console = Console::new(stdin.lock(), std::io::stdout(), args.into());
            console.run()?;
        }
        Some(Commands::Demo { depth, seed }) => run_demo(depth, seed)?,
        None => run_demo(DEFAULT_DEPTH, 1)?,
    }
    Ok(())
}

fn run_demo(depth: i32, seed: u64) -> Result<()> {
    println!("Othello-Minimax: depth-{depth} minimax (Black) vs random (White)\n");

    let mut game = Game::from_board(Board::new(), Player::Black);
    let mut searcher = Searcher::new(depth);
    let mut rng = fastrand::Rng::with_seed(seed);

    while !game.is_over() {
        let player = game.to_move();
        let mv = match player {
            Player::Black => searcher.best_move(game.board(), player),
            Player::White => random_move(game.board(), player, &mut rng),
        };
        match mv {
            Some(mv) => {
                game.play(mv)?;
                println!("{player}: {mv}");
            }
            None => {
                game.pass()?;
                println!("{player}: pass");
            }
        }
    }

    let outcome = game.outcome();
    println!("\n{}", game.board());
    println!("Black: {}  White: {}", outcome.black, outcome.white);
    match outcome.winner() {
        Some(winner) => println!("{winner} wins"),
        None => println!("Draw"),
    }
    Ok(())
}
