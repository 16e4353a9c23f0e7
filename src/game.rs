//! Game state: the live board plus whose turn it is.
//!
//! [`Game`] enforces turn order on top of [`Board`]: only legal moves are
//! accepted, a player may pass only when it has no legal move, and the game
//! ends when neither side can move.

use tracing::info;

use crate::board::{Board, Player};
use crate::coord::Move;
use crate::error::GameError;

/// Final (or current) disc counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub black: usize,
    pub white: usize,
}

impl Outcome {
    /// The player with more discs, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// An Othello game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    /// Plies played so far, passes included.
    ply: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game on the standard board with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Resume from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            ply: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Whether the player to move is forced to pass.
    pub fn must_pass(&self) -> bool {
        !self.board.has_any_moves(self.to_move) && !self.is_over()
    }

    /// Play `mv` for the player to move. Returns the number of discs flipped.
    pub fn play(&mut self, mv: Move) -> Result<usize, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_legal(self.to_move, mv) {
            return Err(GameError::IllegalMove { mv });
        }
        let flipped = self.board.play(self.to_move, mv);
        info!(player = %self.to_move, mv = %mv, flipped, "move played");
        self.advance();
        Ok(flipped)
    }

    /// Forfeit the turn. Only allowed when the player to move has no legal move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.board.has_any_moves(self.to_move) {
            return Err(GameError::PassWithMoves);
        }
        info!(player = %self.to_move, "pass");
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.to_move = self.to_move.opposite();
        self.ply += 1;
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            black: self.board.count(Player::Black),
            white: self.board.count(Player::White),
        }
    }
}
