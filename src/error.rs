//! Error types reported by the board, coordinate parser, and game driver.
//!
//! None of these are fatal: the caller decides whether to re-prompt, pass,
//! or give up.

use derive_more::{Display, Error};

use crate::coord::Move;

/// Errors raised by [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A row or column outside the board.
    #[display("coordinate ({row}, {col}) is off the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Board size that is odd or outside the supported range.
    #[display("unsupported board size {size}: must be even and between 4 and 8")]
    UnsupportedSize { size: usize },
    /// A board diagram that could not be parsed.
    #[display("bad board diagram: {reason}")]
    BadDiagram { reason: String },
}

/// Errors from parsing a two-character coordinate such as "d3".
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    #[display("coordinate {input:?} must be a column letter followed by a row digit")]
    Length { input: String },
    #[display("column {found:?} is not in a-h")]
    Column { found: char },
    #[display("row {found:?} is not in 1-8")]
    Row { found: char },
}

/// Errors from driving a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The move is not in the current legal move set.
    #[display("illegal move {mv}")]
    IllegalMove { mv: Move },
    /// A pass was requested while the player still has a legal move.
    #[display("cannot pass while a legal move exists")]
    PassWithMoves,
    /// Neither player can move any more.
    #[display("the game is over")]
    GameOver,
}
