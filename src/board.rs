//! Othello board representation, move legality, and move application.
//!
//! The board is a square grid of [`Cell`]s stored row-major in a `Vec`.
//! Legality checks and move application share a single directional scan
//! (`capture_run`), so the two can never disagree about which moves
//! are legal.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DIRECTIONS, MAX_SIZE, MIN_SIZE, SIZE};
use crate::coord::Move;
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first.
    Black,
    White,
}

impl Player {
    pub const fn opposite(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Contents of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player whose disc occupies this cell, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Everything [`Board::make_move`] changed, so that [`Board::unmake_move`]
/// can restore the previous position exactly.
///
/// An empty record means the move was illegal and the board was untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flips {
    player: Player,
    placed: Option<Move>,
    flipped: Vec<Move>,
}

impl Flips {
    fn none(player: Player) -> Self {
        Self {
            player,
            placed: None,
            flipped: Vec::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// The square the disc was placed on, or `None` for an illegal move.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }

    /// Squares turned to the mover's color, in scan order.
    pub fn flipped(&self) -> &[Move] {
        &self.flipped
    }

    /// Number of discs flipped.
    pub fn count(&self) -> usize {
        self.flipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_none()
    }
}

/// An Othello position.
///
/// Cloning a board copies its cells; copies never share storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard 8x8 starting position.
    pub fn new() -> Self {
        Self::starting(SIZE)
    }

    /// Starting position on a smaller board.
    ///
    /// The size must be even and within `MIN_SIZE..=MAX_SIZE`. The four centre
    /// discs are laid out as on the standard board.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !is_supported_size(size) {
            return Err(BoardError::UnsupportedSize { size });
        }
        Ok(Self::starting(size))
    }

    fn starting(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        let mid = size / 2;
        board.set(mid - 1, mid - 1, Cell::White);
        board.set(mid - 1, mid, Cell::Black);
        board.set(mid, mid - 1, Cell::Black);
        board.set(mid, mid, Cell::White);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Whether (row, col) lies on the board. Accepts negative values so that
    /// scans can step off any edge.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// The cell at (row, col).
    pub fn at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cell(row, col))
    }

    /// The four corner squares, clockwise from the top left.
    pub fn corners(&self) -> [Move; 4] {
        let last = self.size - 1;
        [
            Move::new(0, 0),
            Move::new(0, last),
            Move::new(last, last),
            Move::new(last, 0),
        ]
    }

    /// Number of discs of `player`'s color.
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Length of the opposing run that a disc placed at (row, col) would
    /// capture in direction (dr, dc).
    ///
    /// The run must consist of one or more opponent discs closed off by one of
    /// the mover's own discs; runs ending at the edge or an empty cell capture
    /// nothing.
    fn capture_run(&self, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let me = Cell::from(player);
        let opp = Cell::from(player.opposite());
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut run = 0;
        while self.in_bounds(r, c) && self.cell(r as usize, c as usize) == opp {
            run += 1;
            r += dr;
            c += dc;
        }
        if run > 0 && self.in_bounds(r, c) && self.cell(r as usize, c as usize) == me {
            run
        } else {
            0
        }
    }

    fn captures_any(&self, player: Player, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.capture_run(player, row, col, dr, dc) > 0)
    }

    /// Whether `player` may place a disc at `mv`. Off-board moves are never legal.
    pub fn is_legal(&self, player: Player, mv: Move) -> bool {
        self.check_bounds(mv.row(), mv.col()).is_ok()
            && self.captures_any(player, mv.row(), mv.col())
    }

    /// All legal moves for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.captures_any(player, row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_any_moves(&self, player: Player) -> bool {
        (0..self.size).any(|row| (0..self.size).any(|col| self.captures_any(player, row, col)))
    }

    /// True when neither player can move.
    pub fn is_terminal(&self) -> bool {
        !self.has_any_moves(Player::Black) && !self.has_any_moves(Player::White)
    }

    /// Place a disc for `player` at `mv` and flip every captured run.
    ///
    /// Returns the number of discs flipped. An illegal move (occupied square or
    /// no capture) flips nothing, leaves the board unchanged and returns 0.
    pub fn apply_move(&mut self, player: Player, mv: Move) -> Result<usize, BoardError> {
        self.check_bounds(mv.row(), mv.col())?;
        Ok(self.play(player, mv))
    }

    /// Like [`Board::apply_move`], but returns a record that
    /// [`Board::unmake_move`] can reverse.
    pub fn make_move(&mut self, player: Player, mv: Move) -> Result<Flips, BoardError> {
        self.check_bounds(mv.row(), mv.col())?;
        Ok(self.play_recorded(player, mv))
    }

    /// Restore the position as it was before the move recorded in `flips`.
    pub fn unmake_move(&mut self, flips: &Flips) {
        let Some(placed) = flips.placed else {
            return;
        };
        let opp = Cell::from(flips.player.opposite());
        for mv in &flips.flipped {
            self.set(mv.row(), mv.col(), opp);
        }
        self.set(placed.row(), placed.col(), Cell::Empty);
    }

    /// Apply a move already known to be on the board.
    pub(crate) fn play(&mut self, player: Player, mv: Move) -> usize {
        self.place(player, mv, None)
    }

    pub(crate) fn play_recorded(&mut self, player: Player, mv: Move) -> Flips {
        let mut flipped = Vec::new();
        if self.place(player, mv, Some(&mut flipped)) == 0 {
            return Flips::none(player);
        }
        Flips {
            player,
            placed: Some(mv),
            flipped,
        }
    }

    fn place(&mut self, player: Player, mv: Move, mut record: Option<&mut Vec<Move>>) -> usize {
        if self.cell(mv.row(), mv.col()) != Cell::Empty {
            return 0;
        }
        let me = Cell::from(player);
        let mut flipped = 0;
        // Rays from the placed disc are disjoint, so flipping one direction
        // cannot change the scan of another.
        for (dr, dc) in DIRECTIONS {
            let run = self.capture_run(player, mv.row(), mv.col(), dr, dc);
            let mut r = mv.row() as isize;
            let mut c = mv.col() as isize;
            for _ in 0..run {
                r += dr;
                c += dc;
                self.set(r as usize, c as usize, me);
                if let Some(rec) = record.as_deref_mut() {
                    rec.push(Move::new(r as usize, c as usize));
                }
            }
            flipped += run;
        }
        if flipped > 0 {
            self.set(mv.row(), mv.col(), me);
        }
        flipped
    }

    /// Render the board with coordinates, marking `highlights` (typically the
    /// legal moves) with `*` on empty squares.
    pub fn render(&self, highlights: &[Move]) -> String {
        let mut out = String::from(" ");
        for col in 0..self.size {
            out.push(' ');
            out.push((b'a' + col as u8) as char);
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&(row + 1).to_string());
            for col in 0..self.size {
                let cell = self.cell(row, col);
                let ch = if cell == Cell::Empty && highlights.contains(&Move::new(row, col)) {
                    '*'
                } else {
                    cell.symbol()
                };
                out.push(' ');
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn is_supported_size(size: usize) -> bool {
    size % 2 == 0 && (MIN_SIZE..=MAX_SIZE).contains(&size)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Parse a board diagram: one character per square, row by row, using `B`,
/// `W` and `.` (or `*`). Whitespace is ignored; the number of squares must
/// be the square of a supported size.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'B' => Ok(Cell::Black),
                'W' => Ok(Cell::White),
                '.' | '*' => Ok(Cell::Empty),
                other => Err(BoardError::BadDiagram {
                    reason: format!("unexpected character {other:?}"),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = (MIN_SIZE..=MAX_SIZE)
            .find(|&n| n * n == cells.len())
            .filter(|&n| is_supported_size(n))
            .ok_or_else(|| BoardError::BadDiagram {
                reason: format!("{} squares do not form a supported board", cells.len()),
            })?;

        Ok(Self { size, cells })
    }
}
