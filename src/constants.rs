//! Constants for board geometry, evaluation weights, and search defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Standard Othello board size (8x8).
pub const SIZE: usize = 8;

/// Smallest supported board. Sizes must be even so the centre square exists.
pub const MIN_SIZE: usize = 4;

/// Largest supported board. Coordinates stay two characters ("h8").
pub const MAX_SIZE: usize = SIZE;

/// The eight scan directions as (row delta, column delta).
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the disc difference.
pub const DISC_WEIGHT: i32 = 10;

/// Weight of the mobility (legal move count) difference.
pub const MOBILITY_WEIGHT: i32 = 5;

/// Bonus (or penalty) per owned (or conceded) corner.
pub const CORNER_WEIGHT: i32 = 25;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax depth in plies.
pub const DEFAULT_DEPTH: i32 = 2;
