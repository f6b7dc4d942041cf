//! Alpha-Beta search with root depth adaptation
//!
//! This module implements the core search algorithm for the engine.
//!
//! # Features
//!
//! - Depth-limited alpha-beta over `(move, child)` pairs in row-major order
//! - Root depth reduction when the branching factor is high
//! - First-in-order tie-break: only a strictly better value replaces the
//!   incumbent move
//! - Anti-othello leaf convention: a leaf is worth the *negated* positional
//!   score of the perspective colour
//!
//! The two branches are kept apart rather than folded into negamax. A node
//! with `maximizing == true` keeps the lowest child value and tightens
//! `beta`; a node with `maximizing == false` keeps the highest and tightens
//! `alpha`. Because leaves are negated, the top-level call (which runs the
//! `maximizing` branch) ends up preferring the position with the highest
//! positional score for the side to move.
//!
//! # Example
//!
//! ```
//! use anti_othello::board::{Board, Color};
//! use anti_othello::eval::Evaluator;
//! use anti_othello::search::{Decision, SearchParams, Searcher};
//!
//! let mut searcher = Searcher::new(Evaluator::default(), SearchParams::default());
//! let board = Board::initial();
//!
//! match searcher.choose_move(&board, Color::Black) {
//!     Decision::Play(pos) => println!("Best move: {pos}"),
//!     Decision::Pass => println!("No legal move"),
//! }
//! ```

use tracing::debug;

use crate::board::{Board, Color, Pos};
use crate::eval::Evaluator;
use crate::rules::{legal_moves, successors};

/// Infinity score for alpha-beta bounds. Evaluations are clamped to
/// `-INF..=INF`, so the window always covers every value.
pub const INF: i32 = i32::MAX;

/// Root branching factor at which the search gives up one ply
pub const MAX_CHOICES: usize = 8;

/// Default search depth
pub const DEFAULT_DEPTH: u8 = 3;

/// How the side to move evolves below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recursion {
    /// Every ply is played by the root side and every node runs the same
    /// branch: a one-sided lookahead of "how good can this line get for me".
    #[default]
    FixedPerspective,
    /// Sides and branches alternate each ply like an ordinary game tree.
    /// Leaves are still scored for the root side.
    Alternating,
}

impl Recursion {
    /// Mover and branch for the children of a node.
    #[inline]
    pub(super) fn next(self, mover: Color, maximizing: bool) -> (Color, bool) {
        match self {
            Recursion::FixedPerspective => (mover, maximizing),
            Recursion::Alternating => (mover.opponent(), !maximizing),
        }
    }
}

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Configured depth in plies
    pub max_depth: u8,
    /// Root move count at which the depth drops by one
    pub max_choices: usize,
    pub recursion: Recursion,
}

impl SearchParams {
    /// Depth actually searched given the number of legal root moves.
    ///
    /// Never drops below one ply, so a position with legal moves always
    /// yields a move.
    #[must_use]
    pub fn effective_depth(&self, root_moves: usize) -> u8 {
        if root_moves >= self.max_choices {
            self.max_depth.saturating_sub(1).max(1)
        } else {
            self.max_depth
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            max_choices: MAX_CHOICES,
            recursion: Recursion::default(),
        }
    }
}

/// Outcome of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Play(Pos),
    /// No legal move for the side to move
    Pass,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the evaluator
    pub leaves: u64,
    /// Sibling lists cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Board after the best move
    pub best_board: Option<Board>,
    /// Value of the root under the search's sign convention
    pub score: i32,
    /// Depth actually searched after root adaptation
    pub depth: u8,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn decision(&self) -> Decision {
        match self.best_move {
            Some(pos) => Decision::Play(pos),
            None => Decision::Pass,
        }
    }
}

/// Value of a node and the child that produced it.
pub(super) struct Line {
    pub(super) score: i32,
    pub(super) best: Option<(Pos, Board)>,
}

impl Line {
    #[inline]
    pub(super) fn leaf(score: i32) -> Self {
        Self { score, best: None }
    }

    /// Starting incumbent for a branch, replaced by the first child offered.
    #[inline]
    pub(super) fn worst(maximizing: bool) -> Self {
        Self::leaf(if maximizing { INF } else { -INF })
    }

    /// Take the first child unconditionally, then only strictly better
    /// values; ties keep the earlier move.
    #[inline]
    pub(super) fn offer(&mut self, maximizing: bool, score: i32, pos: Pos, child: Board) {
        let better = match self.best {
            None => true,
            Some(_) if maximizing => score < self.score,
            Some(_) => score > self.score,
        };
        if better {
            self.score = score;
            self.best = Some((pos, child));
        }
    }
}

/// Depth-limited alpha-beta searcher.
pub struct Searcher {
    pub(super) evaluator: Evaluator,
    pub(super) params: SearchParams,
}

impl Searcher {
    #[must_use]
    pub fn new(evaluator: Evaluator, params: SearchParams) -> Self {
        Self { evaluator, params }
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    /// Pick a move for `side`, or [`Decision::Pass`] when it has none.
    pub fn choose_move(&mut self, board: &Board, side: Color) -> Decision {
        self.search(board, side).decision()
    }

    /// Full alpha-beta search from `board` with `side` to move.
    pub fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        let depth = self.root_depth(board, side);
        let mut stats = SearchStats::default();

        let line = self.alpha_beta(board, depth, -INF, INF, side, side, true, &mut stats);

        debug!(
            nodes = stats.nodes,
            leaves = stats.leaves,
            cutoffs = stats.cutoffs,
            score = line.score,
            "alpha-beta search finished"
        );
        Self::finish(line, depth, stats)
    }

    /// Effective depth for this root, logged once per top-level search.
    pub(super) fn root_depth(&self, board: &Board, side: Color) -> u8 {
        let root_moves = legal_moves(board, side).len();
        let depth = self.params.effective_depth(root_moves);
        let max_choices = self.params.max_choices;
        if root_moves >= max_choices {
            debug!(root_moves, depth, "at least {max_choices} choices, lowered depth");
        } else {
            debug!(root_moves, depth, "fewer than {max_choices} choices, kept depth");
        }
        depth
    }

    pub(super) fn finish(line: Line, depth: u8, stats: SearchStats) -> SearchResult {
        let (best_move, best_board) = match line.best {
            Some((pos, board)) => (Some(pos), Some(board)),
            None => (None, None),
        };
        SearchResult {
            best_move,
            best_board,
            score: line.score,
            depth,
            stats,
        }
    }

    /// Anti-othello leaf value: the negated static score.
    #[inline]
    pub(super) fn leaf_value(&mut self, board: &Board, perspective: Color) -> i32 {
        -self.evaluator.score(board, perspective)
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        mover: Color,
        perspective: Color,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> Line {
        stats.nodes += 1;

        let children = successors(board, mover);
        if depth == 0 || children.is_empty() {
            stats.leaves += 1;
            return Line::leaf(self.leaf_value(board, perspective));
        }

        let (next_mover, next_maximizing) = self.params.recursion.next(mover, maximizing);
        let mut line = Line::worst(maximizing);

        for (pos, child) in children {
            let score = self
                .alpha_beta(
                    &child,
                    depth - 1,
                    alpha,
                    beta,
                    next_mover,
                    perspective,
                    next_maximizing,
                    stats,
                )
                .score;
            line.offer(maximizing, score, pos, child);

            if maximizing {
                beta = beta.min(line.score);
            } else {
                alpha = alpha.max(line.score);
            }
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        line
    }
}
