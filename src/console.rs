//! Text console driver.
//!
//! Runs a full game over any `BufRead`/`Write` pair: humans type moves such
//! as `d3`, the computer answers with a minimax search. Legal moves are shown
//! as `*` on the board. Invalid input re-prompts with the list of legal moves.
//!
//! ## Example
//!
//! ```
//! use othello_minimax::console::{Config, Console, Mode};
//!
//! let config = Config {
//!     mode: Mode::ComputerVsComputer,
//!     size: 4,
//!     ..Config::default()
//! };
//! let mut console = Console::new(std::io::empty(), Vec::new(), config);
//! let outcome = console.run().unwrap();
//! assert!(outcome.black + outcome.white <= 16);
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::board::{Board, Player};
use crate::constants::{DEFAULT_DEPTH, SIZE};
use crate::coord::{Move, parse_coord};
use crate::game::{Game, Outcome};
use crate::search::{SearchMode, Searcher};

/// Who controls each side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

/// Console game settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Search depth for computer players.
    pub depth: i32,
    /// The computer's side in [`Mode::HumanVsComputer`].
    pub computer: Player,
    pub size: usize,
    pub search: SearchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsComputer,
            depth: DEFAULT_DEPTH,
            computer: Player::White,
            size: SIZE,
            search: SearchMode::Copy,
        }
    }
}

/// Console session state.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the session and return the writer (useful for inspecting output).
    pub fn into_output(self) -> W {
        self.output
    }

    fn is_computer(&self, player: Player) -> bool {
        match self.config.mode {
            Mode::HumanVsHuman => false,
            Mode::HumanVsComputer => player == self.config.computer,
            Mode::ComputerVsComputer => true,
        }
    }

    /// Play one game to the end and return the final score.
    ///
    /// Fails if the board size is unsupported, the output cannot be written,
    /// or the input ends while a human is to move.
    pub fn run(&mut self) -> Result<Outcome> {
        let board = Board::with_size(self.config.size)?;
        let mut game = Game::from_board(board, Player::Black);
        let mut searcher = Searcher::new(self.config.depth).with_mode(self.config.search);

        while !game.is_over() {
            let player = game.to_move();
            let legal = game.legal_moves();
            if legal.is_empty() {
                writeln!(self.output, "{player} has no move and passes")?;
                game.pass()?;
                continue;
            }

            writeln!(self.output, "\nTurn: {player}")?;
            self.print_board(game.board(), &legal)?;

            let mv = if self.is_computer(player) {
                let mv = searcher
                    .best_move(game.board(), player)
                    .context("search returned no move despite legal moves")?;
                writeln!(self.output, "Computer plays {mv}")?;
                mv
            } else {
                self.read_human_move(&legal)?
            };
            game.play(mv)?;
        }

        let outcome = game.outcome();
        info!(black = outcome.black, white = outcome.white, "game over");
        writeln!(self.output, "\n=== GAME OVER ===")?;
        self.print_board(game.board(), &[])?;
        match outcome.winner() {
            Some(Player::Black) => {
                writeln!(self.output, "Black wins: {} vs {}", outcome.black, outcome.white)?
            }
            Some(Player::White) => {
                writeln!(self.output, "White wins: {} vs {}", outcome.white, outcome.black)?
            }
            None => writeln!(self.output, "Draw: {} vs {}", outcome.black, outcome.white)?,
        }
        Ok(outcome)
    }

    fn print_board(&mut self, board: &Board, highlights: &[Move]) -> Result<()> {
        write!(self.output, "{}", board.render(highlights))?;
        writeln!(
            self.output,
            "Black: {}  White: {}",
            board.count(Player::Black),
            board.count(Player::White)
        )?;
        Ok(())
    }

    fn read_human_move(&mut self, legal: &[Move]) -> Result<Move> {
        loop {
            write!(self.output, "Your move (e.g. d3): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before the game finished");
            }

            match parse_coord(&line) {
                Ok(mv) if legal.contains(&mv) => return Ok(mv),
                Ok(mv) => writeln!(self.output, "{mv} is not a legal move.")?,
                Err(e) => writeln!(self.output, "Invalid move: {e}.")?,
            }
            let options: Vec<String> = legal.iter().map(Move::to_string).collect();
            writeln!(self.output, "Legal moves: {}", options.join(", "))?;
        }
    }
}
