//! Moves and their two-character text notation.
//!
//! A move is written as a column letter followed by a row digit, both
//! 0-indexed internally: "a1" is (row 0, col 0) and "d3" is (row 2, col 3).
//! Parsing is case-insensitive; formatting is always lowercase.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_SIZE;
use crate::error::CoordError;

/// A board square addressed by row and column.
///
/// A move carries no validity of its own; whether it is legal depends on the
/// board and the player. Once built it cannot be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&str_coord(*self))
    }
}

impl FromStr for Move {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s)
    }
}

/// Convert a move to its coordinate string (e.g. "d3").
///
/// Squares beyond column `z` have no letter and are written as `(row, col)`.
pub fn str_coord(mv: Move) -> String {
    let letter = u32::try_from(mv.col)
        .ok()
        .filter(|&c| c < 26)
        .and_then(|c| char::from_u32('a' as u32 + c));
    match (letter, mv.row.checked_add(1)) {
        (Some(col), Some(row)) => format!("{col}{row}"),
        _ => format!("({}, {})", mv.row, mv.col),
    }
}

/// Parse a coordinate string (e.g. "d3", "D3") into a move.
///
/// Surrounding whitespace is ignored. Only squares of the largest supported
/// board are accepted; the board checks its own bounds when the move is used.
pub fn parse_coord(s: &str) -> Result<Move, CoordError> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordError::Length {
            input: trimmed.to_string(),
        });
    };

    let c = c.to_ascii_lowercase();
    if !('a'..='h').contains(&c) {
        return Err(CoordError::Column { found: c });
    }
    let row = match r.to_digit(10) {
        Some(d) if (1..=MAX_SIZE as u32).contains(&d) => d as usize - 1,
        _ => return Err(CoordError::Row { found: r }),
    };

    Ok(Move::new(row, (c as u8 - b'a') as usize))
}
