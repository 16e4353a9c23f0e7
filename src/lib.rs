//! Othello-Minimax: an Othello (Reversi) engine with a fixed-depth minimax player.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, evaluation weights, search defaults
//! - [`board`] - Core game logic (cells, legal moves, flipping)
//! - [`coord`] - Moves and their "d3"-style notation
//! - [`search`] - Minimax search and static evaluation
//! - [`game`] - Turn order, passes, final score
//! - [`playout`] - Random playouts
//! - [`console`] - Text driver for human and computer players
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_minimax::board::{Board, Player};
//! use othello_minimax::coord::parse_coord;
//! use othello_minimax::search::choose_best_move;
//!
//! // Create a new game and play d3 for Black
//! let mut board = Board::new();
//! let flipped = board.apply_move(Player::Black, parse_coord("d3").unwrap()).unwrap();
//! assert_eq!(flipped, 1);
//!
//! // Search White's reply three plies deep
//! let best = choose_best_move(&board, Player::White, 3).unwrap();
//! println!("Best move: {best}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod playout;
pub mod search;
