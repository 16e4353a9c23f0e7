//! Integration tests for othello-minimax
//!
//! Exercises the public API end to end: the opening position, move
//! application, terminal detection, search determinism, and invariants over
//! random reachable positions.

use fastrand::Rng;

use othello_minimax::board::{Board, Cell, Player};
use othello_minimax::coord::{Move, parse_coord, str_coord};
use othello_minimax::game::Game;
use othello_minimax::playout::{random_move, random_playout};
use othello_minimax::search::{SearchMode, Searcher, choose_best_move, evaluate};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play a sequence of coordinates from the opening, passing when forced.
fn setup_game(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for mv in moves {
        if game.must_pass() {
            game.pass().unwrap();
        }
        game.play(parse_coord(mv).unwrap()).unwrap();
    }
    game
}

/// Collect positions from several seeded random games, one per ply.
fn random_positions(seeds: std::ops::Range<u64>) -> Vec<(Board, Player)> {
    let mut positions = Vec::new();
    for seed in seeds {
        let mut rng = Rng::with_seed(seed);
        let mut game = Game::new();
        while !game.is_over() {
            positions.push((game.board().clone(), game.to_move()));
            random_playout(&mut game, &mut rng, 1).unwrap();
        }
        positions.push((game.board().clone(), game.to_move()));
    }
    positions
}

// =============================================================================
// Opening position
// =============================================================================

#[test]
fn test_initial_disc_counts() {
    let board = Board::new();
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.empty_count(), 60);
}

#[test]
fn test_opening_moves_in_row_major_order() {
    let board = Board::new();
    let moves: Vec<String> = board
        .legal_moves(Player::Black)
        .into_iter()
        .map(str_coord)
        .collect();
    assert_eq!(moves, ["d3", "c4", "f5", "e6"]);
    assert!(board.has_any_moves(Player::Black));
}

#[test]
fn test_d3_flips_one() {
    let mut board = Board::new();
    let d3 = parse_coord("d3").unwrap();
    assert_eq!(d3, Move::new(2, 3));
    assert_eq!(board.apply_move(Player::Black, d3), Ok(1));
    assert_eq!(board.count(Player::Black), 4);
    assert_eq!(board.count(Player::White), 1);
    assert_eq!(board.at(3, 3), Ok(Cell::Black));
}

// =============================================================================
// Terminal detection
// =============================================================================

#[test]
fn test_saturated_board_is_terminal() {
    let board: Board = "BW".repeat(32).parse().unwrap();
    assert_eq!(board.empty_count(), 0);
    assert!(board.is_terminal());
}

#[test]
fn test_single_color_board_is_terminal() {
    // Black wipes out White: there is nothing left to capture.
    let board: Board = format!("B{}", ".".repeat(63)).parse().unwrap();
    assert!(board.is_terminal());
    assert!(!board.has_any_moves(Player::Black));
    assert!(!board.has_any_moves(Player::White));
}

#[test]
fn test_shortest_game() {
    // A known nine-move wipeout.
    let game = setup_game(&["e6", "f4", "e3", "f6", "g5", "d6", "e7", "f5", "c5"]);
    assert!(game.is_over());
    assert_eq!(game.outcome().white, 0);
    assert_eq!(game.outcome().black, 13);
}

#[test]
fn test_terminal_iff_no_moves() {
    for (board, _) in random_positions(0..5) {
        let none = board.legal_moves(Player::Black).is_empty()
            && board.legal_moves(Player::White).is_empty();
        assert_eq!(board.is_terminal(), none);
    }
}

// =============================================================================
// Invariants over reachable positions
// =============================================================================

#[test]
fn test_cells_always_sum_to_64() {
    for (board, _) in random_positions(0..10) {
        assert_eq!(
            board.count(Player::Black) + board.count(Player::White) + board.empty_count(),
            64
        );
    }
}

#[test]
fn test_legal_moves_flip_and_illegal_moves_do_nothing() {
    for (board, player) in random_positions(10..14) {
        let legal = board.legal_moves(player);
        for row in 0..8 {
            for col in 0..8 {
                let mv = Move::new(row, col);
                let mut next = board.clone();
                let flipped = next.apply_move(player, mv).unwrap();
                if legal.contains(&mv) {
                    assert!(flipped >= 1);
                    assert_eq!(next.count(player), board.count(player) + flipped + 1);
                    assert_eq!(
                        next.count(player.opposite()),
                        board.count(player.opposite()) - flipped
                    );
                } else {
                    assert_eq!(flipped, 0);
                    assert_eq!(next, board);
                }
            }
        }
    }
}

#[test]
fn test_make_unmake_matches_apply() {
    for (board, player) in random_positions(20..23) {
        for mv in board.legal_moves(player) {
            let mut applied = board.clone();
            let flipped = applied.apply_move(player, mv).unwrap();

            let mut made = board.clone();
            let flips = made.make_move(player, mv).unwrap();
            assert_eq!(made, applied);
            assert_eq!(flips.count(), flipped);

            made.unmake_move(&flips);
            assert_eq!(made, board);
        }
    }
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let mut board = Board::new();
    assert!(board.at(0, 8).is_err());
    assert!(board.apply_move(Player::Black, Move::new(8, 0)).is_err());
    assert!(board.make_move(Player::Black, Move::new(3, 12)).is_err());
    assert_eq!(board, Board::new());
}

// =============================================================================
// Coordinates
// =============================================================================

#[test]
fn test_coord_roundtrip_all_squares() {
    for row in 0..8 {
        for col in 0..8 {
            let mv = Move::new(row, col);
            assert_eq!(parse_coord(&str_coord(mv)), Ok(mv));
            assert_eq!(parse_coord(&str_coord(mv).to_uppercase()), Ok(mv));
        }
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_depth_one_opening_choice() {
    let board = Board::new();
    let scores = Searcher::new(1).score_moves(&board, Player::Black);
    let top = scores.iter().map(|&(_, s)| s).max().unwrap();
    let first_top = scores.iter().find(|&&(_, s)| s == top).unwrap().0;

    let chosen = choose_best_move(&board, Player::Black, 1).unwrap();
    assert_eq!(chosen, first_top);
    assert_eq!(chosen, Move::new(2, 3));

    let mut next = board.clone();
    next.apply_move(Player::Black, chosen).unwrap();
    assert_eq!(top, evaluate(&next, Player::Black));
}

#[test]
fn test_search_is_deterministic() {
    let game = setup_game(&["d3", "c3", "c4"]);
    let board = game.board();
    let first = choose_best_move(board, Player::White, 3);
    let second = choose_best_move(board, Player::White, 3);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_best_move_is_legal() {
    for (board, player) in random_positions(30..32).into_iter().step_by(7) {
        match choose_best_move(&board, player, 2) {
            Some(mv) => assert!(board.legal_moves(player).contains(&mv)),
            None => assert!(!board.has_any_moves(player)),
        }
    }
}

#[test]
fn test_search_modes_agree_on_random_positions() {
    for (board, player) in random_positions(40..42).into_iter().step_by(5) {
        let mut copy = Searcher::new(2);
        let mut in_place = Searcher::new(2).with_mode(SearchMode::MakeUnmake);
        assert_eq!(
            copy.best_move(&board, player),
            in_place.best_move(&board, player)
        );
    }
}

#[test]
fn test_minimax_beats_random_player() {
    let mut wins = 0;
    for seed in 0..4 {
        let mut rng = Rng::with_seed(seed);
        let mut game = Game::new();
        let mut searcher = Searcher::new(2);
        while !game.is_over() {
            let player = game.to_move();
            let mv = match player {
                Player::Black => searcher.best_move(game.board(), player),
                Player::White => random_move(game.board(), player, &mut rng),
            };
            match mv {
                Some(mv) => {
                    game.play(mv).unwrap();
                }
                None => game.pass().unwrap(),
            }
        }
        if game.outcome().winner() == Some(Player::Black) {
            wins += 1;
        }
    }
    assert!(wins >= 2, "minimax won only {wins} of 4 games");
}
