//! Full-width minimax without pruning.
//!
//! Same recursion, root depth adaptation, leaf convention and tie-break as
//! [`Searcher::search`], only without the alpha/beta window. It visits every
//! node, so it is only practical at shallow depths; its purpose is to show
//! that pruning never changes the chosen move.

use tracing::debug;

use crate::board::{Board, Color};
use crate::rules::successors;

use super::alphabeta::{Line, SearchResult, SearchStats, Searcher};

impl Searcher {
    /// Unpruned search from `board` with `side` to move.
    pub fn minimax(&mut self, board: &Board, side: Color) -> SearchResult {
        let depth = self.root_depth(board, side);
        let mut stats = SearchStats::default();

        let line = self.minimax_node(board, depth, side, side, true, &mut stats);

        debug!(nodes = stats.nodes, leaves = stats.leaves, score = line.score, "minimax finished");
        Self::finish(line, depth, stats)
    }

    fn minimax_node(
        &mut self,
        board: &Board,
        depth: u8,
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
                .minimax_node(&child, depth - 1, next_mover, perspective, next_maximizing, stats)
                .score;
            line.offer(maximizing, score, pos, child);
        }
        line
    }
}
