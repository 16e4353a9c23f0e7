//! Random playouts.
//!
//! A playout plays uniformly random legal moves (passing when forced) until
//! the game ends or a ply limit is reached. Playouts drive the demo opponent
//! and generate arbitrary reachable positions for testing. Pass a seeded
//! [`fastrand::Rng`] to make them reproducible.

use fastrand::Rng;

use crate::board::{Board, Player};
use crate::coord::Move;
use crate::error::GameError;
use crate::game::Game;

/// A uniformly random legal move for `player`, or `None` if it must pass.
pub fn random_move(board: &Board, player: Player, rng: &mut Rng) -> Option<Move> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves in `game` for at most `max_plies` plies (passes count).
///
/// Returns the number of plies played.
pub fn random_playout(game: &mut Game, rng: &mut Rng, max_plies: usize) -> Result<usize, GameError> {
    let mut plies = 0;
    while plies < max_plies && !game.is_over() {
        match random_move(game.board(), game.to_move(), rng) {
            Some(mv) => {
                game.play(mv)?;
            }
            None => game.pass()?,
        }
        plies += 1;
    }
    Ok(plies)
}
