//! Static positional evaluation
//!
//! The score of a position from one colour's point of view is the sum of
//! the weights of its own discs minus the sum of the weights of the
//! opponent's discs. Empty squares contribute nothing, so the evaluation is
//! zero-sum: `evaluate(b, Black) == -evaluate(b, White)` for every board.

use crate::board::{Bitboard, Board, Color};

use super::cache::{CacheStats, CachedScores, EvalCache};
use super::weights::WeightTable;

/// Largest score magnitude. Symmetric so negation never overflows.
pub const SCORE_LIMIT: i32 = i32::MAX;

#[inline]
fn material(discs: Bitboard, weights: &WeightTable) -> i64 {
    discs.iter_ones().map(|pos| i64::from(weights.weight(pos))).sum()
}

/// Scores for both colours in one pass: `(black, white)`.
///
/// Sums run in `i64` and the difference is clamped to
/// `-SCORE_LIMIT..=SCORE_LIMIT`, so any weight table is safe.
#[must_use]
pub fn score_both(board: &Board, weights: &WeightTable) -> CachedScores {
    let limit = i64::from(SCORE_LIMIT);
    let diff = material(board.black, weights) - material(board.white, weights);
    let black = diff.clamp(-limit, limit) as i32;
    (black, -black)
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values mean `color` holds the heavier squares.
#[must_use]
pub fn evaluate(board: &Board, weights: &WeightTable, color: Color) -> i32 {
    select(score_both(board, weights), color)
}

#[inline]
fn select(scores: CachedScores, color: Color) -> i32 {
    match color {
        Color::Black => scores.0,
        Color::White => scores.1,
    }
}

/// Positional evaluator with optional memoization.
pub struct Evaluator {
    weights: WeightTable,
    cache: Option<EvalCache>,
}

impl Evaluator {
    /// Uncached evaluator
    #[must_use]
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            cache: None,
        }
    }

    /// Evaluator that memoizes both colours' scores in `slots` cache slots.
    #[must_use]
    pub fn with_cache(weights: WeightTable, slots: usize) -> Self {
        Self {
            weights,
            cache: Some(EvalCache::new(slots)),
        }
    }

    /// Score `board` for `color`. Identical to [`evaluate`]; the cache only
    /// changes how often the weights are summed.
    pub fn score(&mut self, board: &Board, color: Color) -> i32 {
        let Some(cache) = self.cache.as_mut() else {
            return evaluate(board, &self.weights, color);
        };

        let key = board.key();
        let scores = match cache.probe(key) {
            Some(scores) => scores,
            None => {
                let scores = score_both(board, &self.weights);
                cache.store(key, scores);
                scores
            }
        };
        select(scores, color)
    }

    #[inline]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(EvalCache::stats)
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(WeightTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::empty();
        let table = WeightTable::standard();
        assert_eq!(evaluate(&board, &table, Color::Black), 0);
        assert_eq!(evaluate(&board, &table, Color::White), 0);
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::initial();
        assert_eq!(evaluate(&board, &WeightTable::standard(), Color::Black), 0);
    }

    #[test]
    fn test_corner_is_penalised() {
        let board = Board::empty()
            .with_cell(Pos::new(0, 0), Cell::Black)
            .with_cell(Pos::new(3, 3), Cell::White);
        let table = WeightTable::standard();

        // Black: -100, White: +1
        assert_eq!(evaluate(&board, &table, Color::Black), -101);
        assert_eq!(evaluate(&board, &table, Color::White), 101);
    }

    #[test]
    fn test_untabulated_squares_worth_minus_one() {
        let table = WeightTable::tiered();
        let board = Board::empty().with_cell(Pos::new(3, 3), Cell::White);
        assert_eq!(evaluate(&board, &table, Color::White), -1);
        assert_eq!(evaluate(&board, &table, Color::Black), 1);
    }

    #[test]
    fn test_zero_sum_after_moves() {
        let table = WeightTable::standard();
        let board = Board::initial()
            .with_move(Pos::new(3, 2), Color::Black)
            .with_move(Pos::new(2, 2), Color::White);
        let (black, white) = score_both(&board, &table);
        assert_eq!(black, -white);
    }

    #[test]
    fn test_cached_matches_uncached() {
        let table = WeightTable::standard();
        let mut plain = Evaluator::new(table.clone());
        let mut cached = Evaluator::with_cache(table, 256);

        let boards = [
            Board::initial(),
            Board::initial().with_move(Pos::new(3, 2), Color::Black),
            Board::initial().with_move(Pos::new(5, 4), Color::Black),
        ];

        for board in boards.iter().chain(boards.iter().rev()) {
            for color in [Color::Black, Color::White] {
                assert_eq!(cached.score(board, color), plain.score(board, color));
            }
        }

        let stats = cached.cache_stats().unwrap();
        assert!(stats.hits > 0);
        assert!(plain.cache_stats().is_none());
    }

    #[test]
    fn test_cache_serves_other_colour() {
        let mut cached = Evaluator::with_cache(WeightTable::standard(), 64);
        let board = Board::empty().with_cell(Pos::new(1, 1), Cell::Black);

        assert_eq!(cached.score(&board, Color::Black), 50);
        assert_eq!(cached.score(&board, Color::White), -50);

        let stats = cached.cache_stats().unwrap();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let table = WeightTable::from_entries(Pos::all().map(|pos| (pos, i32::MAX)));
        let mut board = Board::empty();
        for pos in Pos::all().take(40) {
            board = board.with_cell(pos, Cell::Black);
        }
        board = board.with_cell(Pos::new(7, 7), Cell::White);

        assert_eq!(evaluate(&board, &table, Color::Black), SCORE_LIMIT);
        assert_eq!(evaluate(&board, &table, Color::White), -SCORE_LIMIT);
    }

    #[test]
    fn test_evaluator_exposes_weights() {
        let evaluator = Evaluator::new(WeightTable::tiered());
        assert_eq!(*evaluator.weights(), WeightTable::tiered());
        assert_eq!(*Evaluator::default().weights(), WeightTable::standard());
    }
}
