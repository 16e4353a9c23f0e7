//! Fixed-depth minimax search.
//!
//! The search is exhaustive (no pruning) and deterministic: candidate moves
//! are explored in row-major order and ties keep the first move seen.
//!
//! Scores are always from the point of view of the searching player (`ai`),
//! whichever side is to move at a given node. A player with no legal move
//! passes; a pass leaves the board alone but still uses up one ply, so the
//! search always terminates.

use tracing::debug;

use crate::board::{Board, Player};
use crate::constants::{CORNER_WEIGHT, DISC_WEIGHT, MOBILITY_WEIGHT};
use crate::coord::Move;

/// Which side is to move at a search node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The searching player moves and maximizes the score.
    Max,
    /// The opponent moves and minimizes the score.
    Min,
}

impl Turn {
    pub const fn next(self) -> Self {
        match self {
            Turn::Max => Turn::Min,
            Turn::Min => Turn::Max,
        }
    }

    fn mover(self, ai: Player) -> Player {
        match self {
            Turn::Max => ai,
            Turn::Min => ai.opposite(),
        }
    }

    fn worst(self) -> i32 {
        match self {
            Turn::Max => i32::MIN,
            Turn::Min => i32::MAX,
        }
    }

    fn pick(self, best: i32, score: i32) -> i32 {
        match self {
            Turn::Max => best.max(score),
            Turn::Min => best.min(score),
        }
    }
}

/// How hypothetical moves are explored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Every child node works on its own copy of the board.
    #[default]
    Copy,
    /// One scratch board; each move is applied and then undone.
    MakeUnmake,
}

/// Static evaluation of `board` from `perspective`'s point of view.
///
/// `10 * disc difference + 5 * mobility difference + 25 per corner owned`
/// (minus 25 per corner held by the opponent).
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let opp = perspective.opposite();
    let disc_diff = board.count(perspective) as i32 - board.count(opp) as i32;
    let mobility =
        board.legal_moves(perspective).len() as i32 - board.legal_moves(opp).len() as i32;
    let corners: i32 = board
        .corners()
        .iter()
        .map(|c| match board.at(c.row(), c.col()).ok().and_then(|cell| cell.player()) {
            Some(owner) if owner == perspective => CORNER_WEIGHT,
            Some(_) => -CORNER_WEIGHT,
            None => 0,
        })
        .sum();

    DISC_WEIGHT * disc_diff + MOBILITY_WEIGHT * mobility + corners
}

/// Pick a move for `ai` by copy-on-branch minimax to `depth` plies.
///
/// Returns `None` when `ai` has no legal move (the caller should pass).
pub fn choose_best_move(board: &Board, ai: Player, depth: i32) -> Option<Move> {
    Searcher::new(depth).best_move(board, ai)
}

/// What to do at a search node.
enum Node {
    Leaf(i32),
    Pass,
    Expand(Player, Vec<Move>),
}

/// A minimax searcher with a fixed depth.
#[derive(Clone, Debug)]
pub struct Searcher {
    depth: i32,
    mode: SearchMode,
    nodes: u64,
}

impl Searcher {
    pub fn new(depth: i32) -> Self {
        Self {
            depth,
            mode: SearchMode::default(),
            nodes: 0,
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score every legal move of `ai`, in row-major order.
    ///
    /// Each move is applied and the reply is searched to `depth - 1` plies.
    pub fn score_moves(&mut self, board: &Board, ai: Player) -> Vec<(Move, i32)> {
        self.nodes = 0;
        let depth = self.depth - 1;
        let mut scratch = board.clone();
        board
            .legal_moves(ai)
            .into_iter()
            .map(|mv| (mv, self.child(&mut scratch, ai, ai, mv, depth, Turn::Min)))
            .collect()
    }

    /// The first move with the highest score, or `None` if `ai` must pass.
    pub fn best_move(&mut self, board: &Board, ai: Player) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for (mv, score) in self.score_moves(board, ai) {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((mv, score));
            }
        }
        debug!(
            player = %ai,
            depth = self.depth,
            nodes = self.nodes,
            best = ?best.map(|(mv, score)| (mv.to_string(), score)),
            "search finished"
        );
        best.map(|(mv, _)| mv)
    }

    /// Minimax value of `board` for `ai`, with `turn` to move and `depth`
    /// plies left.
    pub fn minimax(&mut self, board: &Board, ai: Player, depth: i32, turn: Turn) -> i32 {
        self.nodes = 0;
        let mut scratch = board.clone();
        self.search(&mut scratch, ai, depth, turn)
    }

    fn classify(&mut self, board: &Board, ai: Player, depth: i32, turn: Turn) -> Node {
        self.nodes += 1;
        if depth <= 0 || board.is_terminal() {
            return Node::Leaf(evaluate(board, ai));
        }
        let mover = turn.mover(ai);
        let moves = board.legal_moves(mover);
        if moves.is_empty() {
            // Not terminal, so the other side has a move.
            return Node::Pass;
        }
        Node::Expand(mover, moves)
    }

    fn search(&mut self, board: &mut Board, ai: Player, depth: i32, turn: Turn) -> i32 {
        match self.classify(board, ai, depth, turn) {
            Node::Leaf(score) => score,
            Node::Pass => self.search(board, ai, depth - 1, turn.next()),
            Node::Expand(mover, moves) => {
                let mut best = turn.worst();
                for mv in moves {
                    let score = self.child(board, ai, mover, mv, depth - 1, turn.next());
                    best = turn.pick(best, score);
                }
                best
            }
        }
    }

    /// Search the position after `mover` plays `mv`. `board` is left as it was.
    fn child(
        &mut self,
        board: &mut Board,
        ai: Player,
        mover: Player,
        mv: Move,
        depth: i32,
        turn: Turn,
    ) -> i32 {
        match self.mode {
            SearchMode::Copy => {
                let mut next = board.clone();
                next.play(mover, mv);
                self.search(&mut next, ai, depth, turn)
            }
            SearchMode::MakeUnmake => {
                let flips = board.play_recorded(mover, mv);
                let score = self.search(board, ai, depth, turn);
                board.unmake_move(&flips);
                score
            }
        }
    }
}
